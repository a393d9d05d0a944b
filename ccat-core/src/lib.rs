// ccat-core/src/lib.rs
//! # ccat Core Library
//!
//! `ccat-core` decides which color every byte of a file is printed in. It
//! holds the color registry, decodes ordered rule and color configurations,
//! compiles them into rule stores, and runs a composition engine that
//! produces a per-byte [`ColorBuffer`]. It performs no terminal output.
//!
//! ## Modules
//!
//! * `color`: The [`Color`] value and RGB trio parsing.
//! * `registry`: The built-in palette and the custom color builder.
//! * `config`: Ordered YAML decoding of rule and color files.
//! * `rules`: [`Rule`], [`RuleStore`] and rule compilation.
//! * `buffer`: The per-byte [`ColorBuffer`].
//! * `engine`: The [`CompositionEngine`] trait.
//! * `engines`: [`RegexEngine`] and [`PlainEngine`].
//! * `errors`: The [`CcatError`] enum.
//!
//! ## Precedence
//!
//! Rules are kept in the order they appear in the configuration. The first
//! rule wins wherever matches overlap: the regex engine paints rules from
//! last to first, and the last write to a byte is final.
//!
//! ## Usage Example
//!
//! ```rust
//! use ccat_core::{compile_rules, ColorRegistry, CompositionEngine, RegexEngine, RuleConfig};
//!
//! let registry = ColorRegistry::builtin();
//! let config = RuleConfig::from_yaml_str("'foo': RED\n'o': BLUE\n", "example").unwrap();
//! let engine = RegexEngine::new(compile_rules(&config, &registry).unwrap());
//!
//! let buffer = engine.compose(b"foo bar".to_vec());
//! assert_eq!(buffer.color_at(1), registry.get("RED"));
//! assert_eq!(buffer.color_at(4), registry.get("NONE"));
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod buffer;
pub mod color;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod registry;
pub mod rules;

pub use buffer::ColorBuffer;
pub use color::{is_valid_color_name, parse_rgb, AnsiColor, Color, Rgb};
pub use config::{ColorConfig, ColorEntry, RuleConfig, RuleEntry, MAX_PATTERN_LENGTH};
pub use engine::CompositionEngine;
pub use engines::plain_engine::PlainEngine;
pub use engines::regex_engine::RegexEngine;
pub use errors::CcatError;
pub use registry::{ColorRegistry, ColorRegistryBuilder, BUILTIN_COLORS};
pub use rules::compiler::{compile_rule, compile_rules};
pub use rules::{Rule, RuleStore};
