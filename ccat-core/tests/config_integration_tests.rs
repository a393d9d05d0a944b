// ccat-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use ccat_core::{
    compile_rules, CcatError, Color, ColorConfig, ColorRegistryBuilder, CompositionEngine,
    RegexEngine, RuleConfig,
};

fn temp_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_rule_file() -> Result<()> {
    let file = temp_file(
        r#"
# comments first so they win
'//.*': GRAY
'"[^"]*"': GREEN
'\b(fn|let|mut)\b': ORANGE
"#,
    )?;
    let config = RuleConfig::load_from_file(file.path())?;
    assert_eq!(config.entries.len(), 3);
    assert_eq!(config.entries[0].pattern, "//.*");
    assert_eq!(config.entries[1].pattern, "\"[^\"]*\"");
    assert_eq!(config.entries[2].color, "ORANGE");
    Ok(())
}

#[test]
fn test_missing_rule_file_is_io_error() {
    let err = RuleConfig::load_from_file("/definitely/not/here.conf").unwrap_err();
    assert!(matches!(err, CcatError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.conf"));
}

#[test]
fn test_custom_colors_feed_rule_compilation() -> Result<()> {
    let colors = temp_file("PURPLE: 254 141 255\nTEAL: \"0 128 128\"\n")?;
    let rules = temp_file("'todo': PURPLE\n'done': TEAL\n")?;

    let mut builder = ColorRegistryBuilder::new();
    builder.load_custom_colors(&ColorConfig::load_from_file(colors.path())?)?;
    let registry = builder.build();

    let store = compile_rules(&RuleConfig::load_from_file(rules.path())?, &registry)?;
    let buffer = RegexEngine::new(store).compose(b"todo done".to_vec());
    assert_eq!(buffer.color_at(0), Some(Color::rgb(254, 141, 255)));
    assert_eq!(buffer.color_at(5), Some(Color::rgb(0, 128, 128)));
    assert_eq!(buffer.color_at(4), Some(Color::None));
    Ok(())
}

#[test]
fn test_lowercase_custom_color_name_fails() -> Result<()> {
    let colors = temp_file("purple: 1 2 3\n")?;
    let mut builder = ColorRegistryBuilder::new();
    let err = builder
        .load_custom_colors(&ColorConfig::load_from_file(colors.path())?)
        .unwrap_err();
    assert!(matches!(err, CcatError::InvalidColorName(ref n) if n == "purple"));
    Ok(())
}

#[test]
fn test_out_of_bounds_rgb_aborts_loading() -> Result<()> {
    let colors = temp_file("GOOD: 1 2 3\nPURPLE: 999 1 1\n")?;
    let mut builder = ColorRegistryBuilder::new();
    let err = builder
        .load_custom_colors(&ColorConfig::load_from_file(colors.path())?)
        .unwrap_err();
    assert!(matches!(err, CcatError::RgbOutOfBounds { .. }));
    assert!(err.to_string().contains("out of bounds"));

    let registry = builder.build();
    assert!(registry.get("GOOD").is_none());
    assert!(registry.get("PURPLE").is_none());
    Ok(())
}

#[test]
fn test_rule_with_custom_color_missing_from_registry() -> Result<()> {
    let rules = temp_file("'x': PURPLE\n")?;
    let err = compile_rules(
        &RuleConfig::load_from_file(rules.path())?,
        &ColorRegistryBuilder::new().build(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid color: PURPLE");
    Ok(())
}
