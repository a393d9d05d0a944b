// ccat-core/src/color.rs
//! Color values and RGB parsing.
//!
//! A [`Color`] is a small `Copy` value. The core never renders it; turning a
//! color into escape codes is the renderer's job.

use crate::errors::CcatError;

/// The eight basic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// A 24-bit color. Each component is 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A renderable color assigned to one byte of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default. No escape codes are emitted.
    #[default]
    None,
    /// A palette color, optionally drawn faint.
    Ansi { color: AnsiColor, dimmed: bool },
    /// A truecolor value.
    Rgb(Rgb),
}

impl Color {
    pub const fn ansi(color: AnsiColor) -> Self {
        Color::Ansi { color, dimmed: false }
    }

    pub const fn dimmed(color: AnsiColor) -> Self {
        Color::Ansi { color, dimmed: true }
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb(Rgb::new(red, green, blue))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

/// Returns true if `name` is usable as a custom color name: non-empty and
/// made only of `A`-`Z`.
pub fn is_valid_color_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_uppercase())
}

const COMPONENTS: [&str; 3] = ["red", "green", "blue"];

/// Parses an `"R G B"` trio for the color `name`.
///
/// Exactly three base-10 integers separated by single spaces are required,
/// each in `0..=255`.
pub fn parse_rgb(name: &str, value: &str) -> Result<Rgb, CcatError> {
    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 3 {
        return Err(CcatError::MalformedRgb {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    let mut out = [0u8; 3];
    for ((slot, raw), component) in out.iter_mut().zip(&parts).zip(COMPONENTS) {
        let parsed: i64 = raw.parse().map_err(|_| CcatError::InvalidRgbComponent {
            name: name.to_string(),
            value: value.to_string(),
            component,
            raw: raw.to_string(),
        })?;
        *slot = u8::try_from(parsed).map_err(|_| CcatError::RgbOutOfBounds {
            name: name.to_string(),
            value: value.to_string(),
            component,
            raw: raw.to_string(),
        })?;
    }

    Ok(Rgb::new(out[0], out[1], out[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_trio() {
        let rgb = parse_rgb("PURPLE", "254 141 255").unwrap();
        assert_eq!(rgb, Rgb::new(254, 141, 255));
    }

    #[test]
    fn components_keep_their_order() {
        let rgb = parse_rgb("X", "1 2 3").unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (1, 2, 3));
    }

    #[test]
    fn wrong_arity_is_malformed() {
        assert!(matches!(parse_rgb("X", "1 2"), Err(CcatError::MalformedRgb { .. })));
        assert!(matches!(parse_rgb("X", "1 2 3 4"), Err(CcatError::MalformedRgb { .. })));
        assert!(matches!(parse_rgb("X", ""), Err(CcatError::MalformedRgb { .. })));
    }

    #[test]
    fn only_single_spaces_separate_components() {
        assert!(matches!(parse_rgb("X", " 1 2 3 "), Err(CcatError::MalformedRgb { .. })));
        assert!(matches!(parse_rgb("X", "1  2 3"), Err(CcatError::MalformedRgb { .. })));
        assert!(matches!(parse_rgb("X", "1\t2 3"), Err(CcatError::InvalidRgbComponent { .. })));
    }

    #[test]
    fn non_integer_component_names_the_channel() {
        match parse_rgb("X", "1 two 3") {
            Err(CcatError::InvalidRgbComponent { component, .. }) => assert_eq!(component, "green"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn out_of_range_components() {
        match parse_rgb("PURPLE", "999 1 1") {
            Err(CcatError::RgbOutOfBounds { component, .. }) => assert_eq!(component, "red"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(parse_rgb("X", "0 0 -1"), Err(CcatError::RgbOutOfBounds { .. })));
        assert!(parse_rgb("X", "0 0 255").is_ok());
    }

    #[test]
    fn color_names_are_uppercase_letters_only() {
        assert!(is_valid_color_name("PURPLE"));
        assert!(!is_valid_color_name("purple"));
        assert!(!is_valid_color_name("Purple"));
        assert!(!is_valid_color_name("RED2"));
        assert!(!is_valid_color_name("DARK_BLUE"));
        assert!(!is_valid_color_name(""));
    }
}
