// ccat-core/src/buffer.rs
//! The per-byte color buffer produced by a composition engine.

use std::ops::Range;

use crate::color::Color;

/// File bytes plus one color per byte.
///
/// Every position starts as [`Color::None`]. Engines overwrite ranges with
/// [`ColorBuffer::paint`]; the last write to a position wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorBuffer {
    content: Vec<u8>,
    colors: Vec<Color>,
}

impl ColorBuffer {
    pub fn new(content: Vec<u8>) -> Self {
        let colors = vec![Color::None; content.len()];
        Self { content, colors }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn color_at(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Overwrites every position in `range` with `color`.
    ///
    /// The range is clamped to the buffer; an empty range paints nothing.
    pub fn paint(&mut self, range: Range<usize>, color: Color) {
        let end = range.end.min(self.colors.len());
        let start = range.start.min(end);
        self.colors[start..end].fill(color);
    }

    /// Sets every position back to [`Color::None`].
    pub fn reset(&mut self) {
        self.colors.fill(Color::None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AnsiColor;

    #[test]
    fn starts_uncolored() {
        let buffer = ColorBuffer::new(b"abc".to_vec());
        assert_eq!(buffer.len(), 3);
        assert!(buffer.colors().iter().all(Color::is_none));
    }

    #[test]
    fn paint_overwrites_and_clamps() {
        let red = Color::ansi(AnsiColor::Red);
        let blue = Color::ansi(AnsiColor::Blue);
        let mut buffer = ColorBuffer::new(b"abcdef".to_vec());
        buffer.paint(1..4, red);
        buffer.paint(3..100, blue);
        assert_eq!(buffer.colors(), &[Color::None, red, red, blue, blue, blue]);
        buffer.paint(2..2, Color::None);
        assert_eq!(buffer.color_at(2), Some(red));
        buffer.reset();
        assert!(buffer.colors().iter().all(Color::is_none));
    }
}
