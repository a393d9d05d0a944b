//! Writes a `ColorBuffer` to a terminal.
//!
//! Consecutive bytes of one color are written as a single styled run. Runs
//! only break on UTF-8 character boundaries, so a multi-byte character takes
//! the color of its first byte. Run bytes are copied as-is, valid UTF-8 or
//! not. Line-number gutters are written uncolored and never affect color
//! assignment.

use std::io::{self, Write};

use ccat_core::{Color, ColorBuffer};

use crate::ui::palette::style_for;

/// Renderer settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix every line with a right-aligned line number.
    pub line_numbers: bool,
}

/// Number of lines in `content`: newline count plus one.
pub fn line_count(content: &[u8]) -> usize {
    content.iter().filter(|&&b| b == b'\n').count() + 1
}

/// Width of the line-number field: the decimal digit count of the line count.
pub fn line_number_width(content: &[u8]) -> usize {
    line_count(content).to_string().len()
}

/// Renders `buffer` into `out`.
///
/// An empty buffer writes nothing, with or without line numbers.
pub fn render<W: Write>(buffer: &ColorBuffer, options: &RenderOptions, out: &mut W) -> io::Result<()> {
    if buffer.is_empty() {
        return Ok(());
    }

    let content = buffer.content();
    let colors = buffer.colors();
    let width = if options.line_numbers { line_number_width(content) } else { 0 };

    let mut start = 0;
    for (index, line) in content.split_inclusive(|&b| b == b'\n').enumerate() {
        if options.line_numbers {
            write_gutter(out, index + 1, width)?;
        }
        let end = start + line.len();
        write_runs(out, line, &colors[start..end])?;
        start = end;
    }
    Ok(())
}

fn write_gutter<W: Write>(out: &mut W, line_number: usize, width: usize) -> io::Result<()> {
    write!(out, "   {:>width$}  ", line_number, width = width)
}

fn is_continuation_byte(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

fn write_runs<W: Write>(out: &mut W, bytes: &[u8], colors: &[Color]) -> io::Result<()> {
    let mut start = 0;
    while start < bytes.len() {
        let color = colors[start];
        let mut end = start + 1;
        while end < bytes.len() && (colors[end] == color || is_continuation_byte(bytes[end])) {
            end += 1;
        }
        write_run(out, &bytes[start..end], color)?;
        start = end;
    }
    Ok(())
}

fn write_run<W: Write>(out: &mut W, run: &[u8], color: Color) -> io::Result<()> {
    match style_for(color) {
        None => out.write_all(run),
        Some(style) => {
            write!(out, "{}", style.prefix_formatter())?;
            out.write_all(run)?;
            write!(out, "{}", style.suffix_formatter())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccat_core::AnsiColor;

    fn rendered(buffer: &ColorBuffer, line_numbers: bool) -> String {
        let mut out = Vec::new();
        render(buffer, &RenderOptions { line_numbers }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn strip(s: &str) -> String {
        String::from_utf8_lossy(&strip_ansi_escapes::strip(s.as_bytes())).to_string()
    }

    #[test]
    fn uncolored_buffer_is_written_verbatim() {
        let buffer = ColorBuffer::new(b"plain text\nsecond line\n".to_vec());
        assert_eq!(rendered(&buffer, false), "plain text\nsecond line\n");
    }

    #[test]
    fn colored_runs_carry_escape_codes() {
        let mut buffer = ColorBuffer::new(b"foo bar".to_vec());
        buffer.paint(0..3, Color::ansi(AnsiColor::Red));
        let out = rendered(&buffer, false);
        assert!(out.starts_with("\u{1b}["));
        assert!(out.ends_with(" bar"));
        assert_eq!(strip(&out), "foo bar");
    }

    #[test]
    fn empty_buffer_writes_nothing() {
        let buffer = ColorBuffer::new(Vec::new());
        assert_eq!(rendered(&buffer, true), "");
        assert_eq!(rendered(&buffer, false), "");
    }

    #[test]
    fn gutters_follow_each_non_final_newline() {
        let buffer = ColorBuffer::new(b"a\nb\nc\n".to_vec());
        assert_eq!(rendered(&buffer, true), "   1  a\n   2  b\n   3  c\n");

        let buffer = ColorBuffer::new(b"a\nb".to_vec());
        assert_eq!(rendered(&buffer, true), "   1  a\n   2  b");
    }

    #[test]
    fn gutter_width_counts_digits() {
        assert_eq!(line_number_width(b""), 1);
        assert_eq!(line_number_width(&[b'\n'; 8]), 1);
        assert_eq!(line_number_width(&[b'\n'; 9]), 2);
        assert_eq!(line_number_width(&[b'\n'; 99]), 3);
        assert_eq!(line_number_width(&[b'\n'; 999]), 4);
    }

    #[test]
    fn gutters_are_right_aligned() {
        let content = "x\n".repeat(10);
        let buffer = ColorBuffer::new(content.into_bytes());
        let out = rendered(&buffer, true);
        assert!(out.starts_with("    1  x\n    2  x\n"));
        assert!(out.ends_with("   10  x\n"));
    }

    #[test]
    fn gutters_stay_uncolored() {
        let mut buffer = ColorBuffer::new(b"ab\ncd".to_vec());
        buffer.paint(0..5, Color::ansi(AnsiColor::Green));
        let out = rendered(&buffer, true);
        assert!(out.starts_with("   1  \u{1b}["));
        assert!(out.contains("   2  \u{1b}["));
        assert_eq!(strip(&out), "   1  ab\n   2  cd");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let mut buffer = ColorBuffer::new("né!".as_bytes().to_vec());
        // paint only the second byte of 'é'
        buffer.paint(2..3, Color::ansi(AnsiColor::Blue));
        let out = rendered(&buffer, false);
        assert_eq!(strip(&out), "né!");
        assert!(!out.contains('\u{fffd}'));
    }

    #[test]
    fn colored_runs_keep_non_utf8_bytes() {
        let content = b"caf\xe9 x".to_vec();
        let mut buffer = ColorBuffer::new(content.clone());
        buffer.paint(0..4, Color::ansi(AnsiColor::Red));
        let mut out = Vec::new();
        render(&buffer, &RenderOptions::default(), &mut out).unwrap();
        assert!(out.starts_with(b"\x1b["));
        assert_eq!(strip_ansi_escapes::strip(&out), content);
    }
}
