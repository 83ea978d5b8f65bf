//! Glyph-data CLI library.

pub mod cli;
pub mod sync;
