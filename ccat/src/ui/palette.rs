//! Maps core colors onto `owo_colors` styles.

use ccat_core::{AnsiColor, Color};
use owo_colors::{AnsiColors, Style};

/// Converts a palette entry into its `owo_colors::AnsiColors` counterpart.
pub fn to_ansi_colors(color: AnsiColor) -> AnsiColors {
    match color {
        AnsiColor::Black => AnsiColors::Black,
        AnsiColor::Red => AnsiColors::Red,
        AnsiColor::Green => AnsiColors::Green,
        AnsiColor::Yellow => AnsiColors::Yellow,
        AnsiColor::Blue => AnsiColors::Blue,
        AnsiColor::Magenta => AnsiColors::Magenta,
        AnsiColor::Cyan => AnsiColors::Cyan,
        AnsiColor::White => AnsiColors::White,
    }
}

/// The style used to draw `color`, or `None` for the terminal default.
pub fn style_for(color: Color) -> Option<Style> {
    match color {
        Color::None => None,
        Color::Ansi { color, dimmed } => {
            let style = Style::new().color(to_ansi_colors(color));
            Some(if dimmed { style.dimmed() } else { style })
        }
        Color::Rgb(rgb) => Some(Style::new().truecolor(rgb.red, rgb.green, rgb.blue)),
    }
}
