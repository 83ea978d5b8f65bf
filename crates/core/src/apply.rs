//! Applying an external glyph-data map onto font sources.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::{GlyphDataMap, source::FontSource};

/// Overlay `data` onto each source's existing metadata tables and persist.
///
/// Incoming values win on key collision; keys absent from `data` are left
/// untouched; the skip-export list becomes a sorted set union. Tables that
/// end up empty are removed from the store rather than written empty.
///
/// Glyph ordering is deliberately not rewritten. No rollback either: if a
/// save fails partway through a batch, earlier sources stay saved.
pub fn apply<S: FontSource>(sources: &mut [S], data: &GlyphDataMap) -> Result<()> {
    let mut postscript_names = BTreeMap::new();
    let mut categories = BTreeMap::new();
    let mut skip_export = BTreeSet::new();
    for (name, record) in data {
        if let Some(psn) = &record.postscript_name {
            postscript_names.insert(name.clone(), psn.clone());
        }
        if let Some(category) = &record.opentype_category {
            categories.insert(name.clone(), category.clone());
        }
        if !record.export {
            skip_export.insert(name.clone());
        }
    }

    for source in sources {
        let mut merged_psn = source.postscript_names();
        merged_psn.extend(postscript_names.iter().map(|(k, v)| (k.clone(), v.clone())));
        source.set_postscript_names(&merged_psn);

        let mut merged_categories = source.opentype_categories();
        merged_categories.extend(categories.iter().map(|(k, v)| (k.clone(), v.clone())));
        source.set_opentype_categories(&merged_categories);

        let mut merged_skip = source.skip_export_glyphs();
        merged_skip.extend(skip_export.iter().cloned());
        let merged_skip: Vec<String> = merged_skip.into_iter().collect();
        source.set_skip_export_glyphs(&merged_skip);

        source.save()?;
    }

    Ok(())
}

/// Delete all three metadata tables from each source and persist. Used when
/// the extracted CSV becomes the sole owner of the data.
pub fn strip<S: FontSource>(sources: &mut [S]) -> Result<()> {
    for source in sources {
        source.set_postscript_names(&BTreeMap::new());
        source.set_opentype_categories(&BTreeMap::new());
        source.set_skip_export_glyphs(&[]);
        source.save()?;
    }
    Ok(())
}
