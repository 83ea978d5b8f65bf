//! Aggregation of glyph metadata across font sources.

use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter},
    path::PathBuf,
};

use crate::{GlyphDataMap, GlyphRecord, source::FontSource};

/// Two sources disagreed about a glyph's metadata. The first-seen record is
/// kept; the later one is reported and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub glyph: String,
    pub kept: GlyphRecord,
    pub found: GlyphRecord,
    pub origin: PathBuf,
}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "data mismatch for glyph '{}': have {:?}, found {:?} in {}",
            self.glyph,
            self.kept,
            self.found,
            self.origin.display()
        )
    }
}

/// Compute the order in which a source's glyphs are visited: every name in
/// the explicit glyph order first, then container glyphs missing from it in
/// byte-wise sorted order. Keeps traversal reproducible regardless of the
/// container's internal ordering.
fn visitation_order(source: &impl FontSource) -> Vec<String> {
    let order = source.glyph_order();
    let listed: BTreeSet<&str> = order.iter().map(String::as_str).collect();
    let mut leftovers: Vec<String> =
        source.glyph_names().into_iter().filter(|name| !listed.contains(name.as_str())).collect();
    leftovers.sort();

    let mut names = order;
    names.extend(leftovers);
    names
}

/// Merge the glyph metadata of `sources` into one insertion-ordered map.
///
/// Sources are processed in the order given; the first source to mention a
/// glyph wins, and later disagreements are returned as [`Conflict`]s rather
/// than raised. Names with no backing glyph are skipped silently.
pub fn aggregate<S: FontSource>(sources: &[S]) -> (GlyphDataMap, Vec<Conflict>) {
    let mut data = GlyphDataMap::default();
    let mut conflicts = Vec::new();

    for source in sources {
        let postscript_names = source.postscript_names();
        let categories = source.opentype_categories();
        let skip_export = source.skip_export_glyphs();

        for name in visitation_order(source) {
            // Listed glyphs may not exist in the container.
            let Some(unicodes) = source.glyph_unicodes(&name) else {
                continue;
            };
            let record = GlyphRecord {
                export: !skip_export.contains(&name),
                opentype_category: categories.get(&name).cloned(),
                postscript_name: postscript_names.get(&name).cloned(),
                unicodes,
            };
            match data.get(&name) {
                Some(kept) if *kept != record => conflicts.push(Conflict {
                    glyph: name,
                    kept: kept.clone(),
                    found: record,
                    origin: source.origin().to_path_buf(),
                }),
                Some(_) => {}
                None => {
                    data.insert(name, record);
                }
            }
        }
    }

    (data, conflicts)
}
