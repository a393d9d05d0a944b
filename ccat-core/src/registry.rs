//! The color registry.
//!
//! A [`ColorRegistryBuilder`] seeds the built-in palette, accepts validated
//! custom colors, and is then frozen into an immutable [`ColorRegistry`]
//! that rule compilation resolves color names against.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;

use log::debug;

use crate::color::{is_valid_color_name, parse_rgb, AnsiColor, Color, Rgb};
use crate::config::ColorConfig;
use crate::errors::CcatError;

/// The built-in palette, available without any configuration.
pub const BUILTIN_COLORS: &[(&str, Color)] = &[
    ("BLACK", Color::ansi(AnsiColor::Black)),
    ("RED", Color::ansi(AnsiColor::Red)),
    ("GREEN", Color::ansi(AnsiColor::Green)),
    ("YELLOW", Color::ansi(AnsiColor::Yellow)),
    ("BLUE", Color::ansi(AnsiColor::Blue)),
    ("MAGENTA", Color::rgb(254, 141, 255)),
    ("CYAN", Color::ansi(AnsiColor::Cyan)),
    ("WHITE", Color::ansi(AnsiColor::White)),
    ("GRAY", Color::dimmed(AnsiColor::White)),
    ("ORANGE", Color::rgb(255, 153, 28)),
    ("DARKBLUE", Color::rgb(0, 112, 255)),
    ("NONE", Color::None),
];

/// An immutable name to color table.
#[derive(Debug, Clone)]
pub struct ColorRegistry {
    colors: HashMap<String, Color>,
}

impl ColorRegistry {
    /// A registry holding only the built-in palette.
    pub fn builtin() -> Self {
        ColorRegistryBuilder::new().build()
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Looks up `name`, failing with [`CcatError::UnknownColor`].
    pub fn resolve(&self, name: &str) -> Result<Color, CcatError> {
        self.get(name)
            .ok_or_else(|| CcatError::UnknownColor(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Clone)]
pub struct ColorRegistryBuilder {
    colors: HashMap<String, Color>,
}

impl ColorRegistryBuilder {
    pub fn new() -> Self {
        let colors = BUILTIN_COLORS
            .iter()
            .map(|(name, color)| (name.to_string(), *color))
            .collect();
        Self { colors }
    }

    /// Adds a truecolor entry under `name`.
    ///
    /// Custom names may shadow built-ins.
    pub fn register_custom(&mut self, name: &str, rgb: Rgb) -> Result<&mut Self, CcatError> {
        if !is_valid_color_name(name) {
            return Err(CcatError::InvalidColorName(name.to_string()));
        }
        if self.colors.insert(name.to_string(), Color::Rgb(rgb)).is_some() {
            debug!("Custom color '{}' replaces an existing entry.", name);
        }
        Ok(self)
    }

    /// Validates every entry of `config`, then registers all of them.
    ///
    /// Nothing is registered if any entry is invalid.
    pub fn load_custom_colors(&mut self, config: &ColorConfig) -> Result<&mut Self, CcatError> {
        let staged = config
            .entries
            .iter()
            .map(|entry| {
                if !is_valid_color_name(&entry.name) {
                    return Err(CcatError::InvalidColorName(entry.name.clone()));
                }
                Ok((entry.name.as_str(), parse_rgb(&entry.name, &entry.rgb)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (name, rgb) in staged {
            self.register_custom(name, rgb)?;
        }
        debug!("Registered {} custom colors.", config.entries.len());
        Ok(self)
    }

    pub fn build(self) -> ColorRegistry {
        ColorRegistry { colors: self.colors }
    }
}

impl Default for ColorRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
