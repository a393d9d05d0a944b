//! Configuration decoding for `ccat-core`.
//!
//! Both configuration files are YAML mappings whose entry order matters:
//! rule files map a regex pattern to a color name, color files map a custom
//! color name to an `"R G B"` trio. Entries are read into plain ordered
//! vectors. The mapping is decoded with `serde_yml`, whose `Mapping` keeps
//! insertion order and rejects duplicate keys.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use log::{debug, info};
use serde_yml::Value;

use crate::errors::CcatError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// One `PATTERN: COLORNAME` line of a rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub pattern: String,
    pub color: String,
}

/// The decoded contents of a rule file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    pub entries: Vec<RuleEntry>,
}

/// One `COLORNAME: "R G B"` line of a custom color file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub rgb: String,
}

/// The decoded contents of a custom color file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorConfig {
    pub entries: Vec<ColorEntry>,
}

impl RuleConfig {
    /// Decodes a rule file from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(text: &str, origin: &str) -> Result<Self, CcatError> {
        let entries = ordered_pairs(text, origin)?
            .into_iter()
            .map(|(pattern, color)| RuleEntry { pattern, color })
            .collect::<Vec<_>>();
        debug!("Decoded {} rule entries from {}.", entries.len(), origin);
        Ok(Self { entries })
    }

    /// Loads a rule file from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CcatError> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let text = read_config(path)?;
        Self::from_yaml_str(&text, &path.display().to_string())
    }
}

impl ColorConfig {
    /// Decodes a custom color file from YAML text.
    pub fn from_yaml_str(text: &str, origin: &str) -> Result<Self, CcatError> {
        let entries = ordered_pairs(text, origin)?
            .into_iter()
            .map(|(name, rgb)| ColorEntry { name, rgb })
            .collect::<Vec<_>>();
        debug!("Decoded {} custom color entries from {}.", entries.len(), origin);
        Ok(Self { entries })
    }

    /// Loads a custom color file from disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CcatError> {
        let path = path.as_ref();
        info!("Loading custom colors from: {}", path.display());
        let text = read_config(path)?;
        Self::from_yaml_str(&text, &path.display().to_string())
    }
}

fn read_config(path: &Path) -> Result<String, CcatError> {
    std::fs::read_to_string(path).map_err(|source| CcatError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// A document with nothing but blank lines and comments.
fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

/// Decodes a YAML mapping of string scalars into ordered key/value pairs.
fn ordered_pairs(text: &str, origin: &str) -> Result<Vec<(String, String)>, CcatError> {
    if is_blank_document(text) {
        return Ok(Vec::new());
    }

    let document: Value = serde_yml::from_str(text).map_err(|source| CcatError::Yaml {
        origin: origin.to_string(),
        source,
    })?;

    let mapping = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(CcatError::InvalidEntry {
                origin: origin.to_string(),
                reason: format!("expected a mapping of entries, found {}", describe(&other)),
            })
        }
    };

    mapping
        .into_iter()
        .map(|(key, value)| {
            let key = expect_string(key, origin, "key")?;
            let value = expect_string(value, origin, &format!("value for '{}'", key))?;
            Ok((key, value))
        })
        .collect()
}

fn expect_string(value: Value, origin: &str, what: &str) -> Result<String, CcatError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(CcatError::InvalidEntry {
            origin: origin.to_string(),
            reason: format!("{} must be a string, found {} (quote it)", what, describe(&other)),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
