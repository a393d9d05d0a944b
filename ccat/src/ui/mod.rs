//! Terminal output: color styling and the buffer renderer.

pub mod palette;
pub mod renderer;
