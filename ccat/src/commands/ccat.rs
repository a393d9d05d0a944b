//! The ccat command: load configuration, compose colors, render.
//!
//! Every fatal problem (unreadable input, bad rule file, bad custom color)
//! surfaces before anything is written to stdout.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use ccat_core::{
    compile_rules, ColorConfig, ColorRegistry, ColorRegistryBuilder, CompositionEngine,
    PlainEngine, RegexEngine, RuleConfig,
};

use crate::config_dir;
use crate::ui::renderer::{self, RenderOptions};

/// Options for one ccat run.
#[derive(Debug, Clone)]
pub struct CcatOptions {
    pub input: PathBuf,
    pub config_dir: PathBuf,
    pub disable_color: bool,
    pub line_numbers: bool,
}

/// Runs ccat, writing the rendered file to stdout.
pub fn run_ccat(opts: &CcatOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run_ccat_to(opts, &mut writer)?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

/// Runs ccat, writing the rendered file to `out`.
pub fn run_ccat_to<W: Write>(opts: &CcatOptions, out: &mut W) -> Result<()> {
    info!("Starting ccat for {}.", opts.input.display());

    if config_dir::ensure_default_configs(&opts.config_dir)? {
        info!("Seeded default configuration in {}.", opts.config_dir.display());
    }

    let content = read_input(&opts.input)?;
    let engine = build_engine(opts)?;
    debug!("Composing {} bytes with the {} engine.", content.len(), engine.name());

    let buffer = engine.compose(content);
    renderer::render(&buffer, &RenderOptions { line_numbers: opts.line_numbers }, out)
        .context("Failed to write output")?;

    info!("ccat finished.");
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        anyhow::bail!("{}: no such file", path.display());
    }
    fs::read(path).with_context(|| format!("Failed to read input file {}", path.display()))
}

/// Chooses the engine for `opts.input`.
///
/// Disabled color and file types without a rule file get a [`PlainEngine`];
/// in both cases no rule file is read and no pattern is compiled.
pub fn build_engine(opts: &CcatOptions) -> Result<Box<dyn CompositionEngine>> {
    if opts.disable_color {
        debug!("Color disabled; skipping rule loading.");
        return Ok(Box::new(PlainEngine));
    }

    let Some(rules_path) = config_dir::rules_file_for(&opts.config_dir, &opts.input) else {
        info!("No rules for {}; printing without color.", opts.input.display());
        return Ok(Box::new(PlainEngine));
    };

    let registry = load_registry(&opts.config_dir)?;
    let config = RuleConfig::load_from_file(&rules_path)?;
    let rules = compile_rules(&config, &registry)
        .with_context(|| format!("Failed to load rules from {}", rules_path.display()))?;
    info!("Loaded {} rules from {}.", rules.len(), rules_path.display());

    Ok(Box::new(RegexEngine::new(rules)))
}

/// Builds the color registry: built-ins plus `colors.conf` when present.
pub fn load_registry(dir: &Path) -> Result<ColorRegistry> {
    let mut builder = ColorRegistryBuilder::new();
    if let Some(path) = config_dir::colors_file(dir) {
        let colors = ColorConfig::load_from_file(&path)?;
        builder
            .load_custom_colors(&colors)
            .with_context(|| format!("Failed to load custom colors from {}", path.display()))?;
    }
    Ok(builder.build())
}
