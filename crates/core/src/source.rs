//! The capability interface for a font source.
//!
//! Aggregation and merging never touch font files directly; they go through
//! this trait so the logic can be exercised against an in-memory fake. The
//! UFO-backed implementation lives in the `glyphdata-ufo` crate.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use anyhow::Result;

/// A mutable font source holding a glyph container and a key-value metadata
/// store with three known tables.
pub trait FontSource {
    /// Where this source came from, for diagnostics.
    fn origin(&self) -> &Path;

    /// The explicit glyph ordering, possibly incomplete relative to the
    /// glyph container.
    fn glyph_order(&self) -> Vec<String>;

    /// Every glyph name present in the glyph container.
    fn glyph_names(&self) -> Vec<String>;

    /// The code points of the named glyph, in stored order. `None` when no
    /// backing glyph exists for the name.
    fn glyph_unicodes(&self, name: &str) -> Option<Vec<u32>>;

    /// The glyph name → PostScript name table; empty when absent.
    fn postscript_names(&self) -> BTreeMap<String, String>;

    /// The glyph name → OpenType category table; empty when absent.
    fn opentype_categories(&self) -> BTreeMap<String, String>;

    /// The set of glyphs excluded from compiled output; empty when absent.
    fn skip_export_glyphs(&self) -> BTreeSet<String>;

    /// Replace the PostScript name table. An empty table removes it from
    /// the store entirely rather than persisting an empty structure.
    fn set_postscript_names(&mut self, table: &BTreeMap<String, String>);

    /// Replace the OpenType category table; empty removes it.
    fn set_opentype_categories(&mut self, table: &BTreeMap<String, String>);

    /// Replace the skip-export list; empty removes it.
    fn set_skip_export_glyphs(&mut self, names: &[String]);

    /// Persist the source.
    fn save(&mut self) -> Result<()>;
}
