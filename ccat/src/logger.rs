//! Logger setup for the `ccat` binary.
//!
//! Logs go to stderr through `env_logger` so they never mix with rendered
//! file contents on stdout.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger.
///
/// `level_override` replaces whatever `RUST_LOG` asks for. Calling this more
/// than once is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
