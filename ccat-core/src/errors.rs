//! errors.rs - Custom error types for the ccat-core library.
//!
//! Every fallible operation in the core (color registration, configuration
//! decoding, rule compilation) reports one of these variants. The
//! composition engine itself has no error path.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types produced by the `ccat-core` library.
///
/// `#[non_exhaustive]` so new configuration checks can add variants without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CcatError {
    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern '{0}' length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid color: {0}")]
    UnknownColor(String),

    #[error("Invalid color name: '{0}' (custom color names may only contain the uppercase letters A-Z)")]
    InvalidColorName(String),

    #[error("Invalid RGB trio '{value}' for color {name}: expected three space-separated integers")]
    MalformedRgb { name: String, value: String },

    #[error("Invalid RGB trio '{value}' for color {name}: {component} value '{raw}' is not an integer")]
    InvalidRgbComponent {
        name: String,
        value: String,
        component: &'static str,
        raw: String,
    },

    #[error("Invalid RGB trio '{value}' for color {name}: {component} value {raw} is out of bounds (0-255)")]
    RgbOutOfBounds {
        name: String,
        value: String,
        component: &'static str,
        raw: String,
    },

    #[error("Invalid entry in {origin}: {reason}")]
    InvalidEntry { origin: String, reason: String },

    #[error("Failed to parse {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yml::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
