//! Configuration directory resolution and default configuration seeding.
//!
//! The directory holds one `<extension>.conf` rule file per file type and an
//! optional `colors.conf` of custom colors. When the directory does not
//! exist yet it is created and filled with the embedded defaults.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CCAT_CONFIG_DIR";

/// File name of the custom color definitions.
pub const COLORS_FILE_NAME: &str = "colors.conf";

/// Embedded default configuration files, written on first run.
pub const DEFAULT_CONFIGS: &[(&str, &str)] = &[
    ("c.conf", include_str!("../config/defaults/c.conf")),
    ("go.conf", include_str!("../config/defaults/go.conf")),
    ("md.conf", include_str!("../config/defaults/md.conf")),
    ("py.conf", include_str!("../config/defaults/py.conf")),
    ("rs.conf", include_str!("../config/defaults/rs.conf")),
    ("sh.conf", include_str!("../config/defaults/sh.conf")),
    (COLORS_FILE_NAME, include_str!("../config/defaults/colors.conf")),
];

/// Returns `override_dir` if given, otherwise `<user config dir>/ccat`.
pub fn resolve_config_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    dirs::config_dir()
        .map(|dir| dir.join("ccat"))
        .ok_or_else(|| anyhow!("Could not determine the user configuration directory; pass --config-dir or set {}", CONFIG_DIR_ENV))
}

/// Creates `dir` with the default configuration files if it does not exist.
///
/// Returns `true` when the defaults were written. An existing directory is
/// never touched.
pub fn ensure_default_configs(dir: &Path) -> Result<bool> {
    if dir.exists() {
        debug!("Configuration directory {} already exists.", dir.display());
        return Ok(false);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create configuration directory {}", dir.display()))?;
    for (name, contents) in DEFAULT_CONFIGS {
        let path = dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write default configuration {}", path.display()))?;
    }
    info!("Wrote {} default configuration files to {}.", DEFAULT_CONFIGS.len(), dir.display());
    Ok(true)
}

/// The rule file for `input`'s extension, if the file exists.
pub fn rules_file_for(dir: &Path, input: &Path) -> Option<PathBuf> {
    let extension = input.extension()?.to_str()?;
    if extension.is_empty() {
        return None;
    }
    let path = dir.join(format!("{}.conf", extension));
    if path.is_file() {
        Some(path)
    } else {
        debug!("No rule file {} for extension '{}'.", path.display(), extension);
        None
    }
}

/// The custom color file, if present.
pub fn colors_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(COLORS_FILE_NAME);
    path.is_file().then_some(path)
}
