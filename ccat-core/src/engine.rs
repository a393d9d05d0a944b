// ccat-core/src/engine.rs
//! Defines the `CompositionEngine` trait.
//!
//! An engine turns raw file bytes into a [`ColorBuffer`]. Engines are total
//! over valid inputs: every configuration problem is caught while the engine
//! is being built, so applying one cannot fail.
//!
//! License: MIT OR APACHE 2.0

use crate::buffer::ColorBuffer;

/// A pluggable per-byte color assignment strategy.
pub trait CompositionEngine: Send + Sync {
    /// Resets `buffer` to all-NONE, then assigns its final colors in place.
    fn apply(&self, buffer: &mut ColorBuffer);

    /// Builds a buffer over `content` and applies this engine to it.
    fn compose(&self, content: Vec<u8>) -> ColorBuffer {
        let mut buffer = ColorBuffer::new(content);
        self.apply(&mut buffer);
        buffer
    }

    /// A short name for logs.
    fn name(&self) -> &'static str;
}
