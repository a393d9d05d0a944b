//! An engine that leaves every byte uncolored.
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::buffer::ColorBuffer;
use crate::engine::CompositionEngine;

/// Never runs a pattern. The buffer stays all-NONE.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEngine;

impl CompositionEngine for PlainEngine {
    fn apply(&self, buffer: &mut ColorBuffer) {
        debug!("Plain engine: leaving {} bytes uncolored.", buffer.len());
        buffer.reset();
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
