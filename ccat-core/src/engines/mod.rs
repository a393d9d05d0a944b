// ccat-core/src/engines/mod.rs
//! Concrete `CompositionEngine` implementations.
//!
//! `regex_engine` paints rule matches; `plain_engine` assigns nothing and is
//! used whenever coloring is disabled or no rules exist for a file type.

pub mod plain_engine;
pub mod regex_engine;
