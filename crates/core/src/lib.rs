//! Core glyph-data logic: aggregation across font sources, merging back
//! into them, and the CSV interchange codec.
//!
//! Font files are only reached through the [`FontSource`] trait; see the
//! `glyphdata-ufo` crate for the UFO-backed implementation.

mod aggregate;
mod apply;
mod codec;
mod error;
mod record;
mod source;

pub use aggregate::{Conflict, aggregate};
pub use apply::{apply, strip};
pub use codec::{HEADER, read_csv, read_csv_path, write_csv, write_csv_path};
pub use error::{GlyphDataError, Result};
pub use record::{GlyphDataMap, GlyphRecord};
pub use source::FontSource;
