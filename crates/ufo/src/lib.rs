//! UFO-backed [`FontSource`] built on norad.
//!
//! The three metadata tables live in the UFO lib under their `public.*`
//! keys; this crate translates between those plist structures and the
//! plain collections the core works with.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glyphdata_core::FontSource;
use norad::Font;
use plist::Value;

/// Lib key for the glyph name → PostScript name table.
pub const POSTSCRIPT_NAMES_KEY: &str = "public.postscriptNames";
/// Lib key for the glyph name → OpenType category table.
pub const OPENTYPE_CATEGORIES_KEY: &str = "public.openTypeCategories";
/// Lib key for the list of glyphs excluded from compiled output.
pub const SKIP_EXPORT_KEY: &str = "public.skipExportGlyphs";
/// Lib key for the explicit glyph ordering.
pub const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// A UFO on disk, opened for metadata sync.
pub struct UfoSource {
    font: Font,
    path: PathBuf,
}

impl UfoSource {
    /// Load the UFO at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let font = Font::load(&path)
            .with_context(|| format!("Failed to load UFO: {}", path.display()))?;
        Ok(Self { font, path })
    }

    fn string_table(&self, key: &str) -> BTreeMap<String, String> {
        self.font
            .lib
            .get(key)
            .and_then(Value::as_dictionary)
            .map(|dict| {
                dict.iter()
                    .filter_map(|(name, value)| {
                        value.as_string().map(|s| (name.clone(), s.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn name_list(&self, key: &str) -> Vec<String> {
        self.font
            .lib
            .get(key)
            .and_then(Value::as_array)
            .map(|values| {
                values.iter().filter_map(|v| v.as_string().map(str::to_string)).collect()
            })
            .unwrap_or_default()
    }

    fn set_string_table(&mut self, key: &str, table: &BTreeMap<String, String>) {
        if table.is_empty() {
            self.font.lib.remove(key);
        } else {
            let mut dict = plist::Dictionary::new();
            for (name, value) in table {
                dict.insert(name.clone(), Value::String(value.clone()));
            }
            self.font.lib.insert(key.to_string(), Value::Dictionary(dict));
        }
    }
}

impl FontSource for UfoSource {
    fn origin(&self) -> &Path {
        &self.path
    }

    fn glyph_order(&self) -> Vec<String> {
        self.name_list(GLYPH_ORDER_KEY)
    }

    fn glyph_names(&self) -> Vec<String> {
        self.font.default_layer().iter().map(|glyph| glyph.name().to_string()).collect()
    }

    fn glyph_unicodes(&self, name: &str) -> Option<Vec<u32>> {
        self.font
            .default_layer()
            .get_glyph(name)
            .map(|glyph| glyph.codepoints.iter().map(u32::from).collect())
    }

    fn postscript_names(&self) -> BTreeMap<String, String> {
        self.string_table(POSTSCRIPT_NAMES_KEY)
    }

    fn opentype_categories(&self) -> BTreeMap<String, String> {
        self.string_table(OPENTYPE_CATEGORIES_KEY)
    }

    fn skip_export_glyphs(&self) -> BTreeSet<String> {
        self.name_list(SKIP_EXPORT_KEY).into_iter().collect()
    }

    fn set_postscript_names(&mut self, table: &BTreeMap<String, String>) {
        self.set_string_table(POSTSCRIPT_NAMES_KEY, table);
    }

    fn set_opentype_categories(&mut self, table: &BTreeMap<String, String>) {
        self.set_string_table(OPENTYPE_CATEGORIES_KEY, table);
    }

    fn set_skip_export_glyphs(&mut self, names: &[String]) {
        if names.is_empty() {
            self.font.lib.remove(SKIP_EXPORT_KEY);
        } else {
            let values = names.iter().map(|n| Value::String(n.clone())).collect();
            self.font.lib.insert(SKIP_EXPORT_KEY.to_string(), Value::Array(values));
        }
    }

    fn save(&mut self) -> Result<()> {
        self.font
            .save(&self.path)
            .with_context(|| format!("Failed to save UFO: {}", self.path.display()))
    }
}
