// ccat/src/lib.rs
//! # ccat CLI Application
//!
//! Prints files to the terminal, colored by the ordered regex rules that
//! `ccat-core` composes into a per-byte color buffer.

pub mod cli;
pub mod commands;
pub mod config_dir;
pub mod logger;
pub mod ui;

pub use commands::ccat::{run_ccat, CcatOptions};
