//! Glyph metadata records and the ordered map that holds them.

use indexmap::IndexMap;

/// The metadata tracked for a single glyph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphRecord {
    /// Whether the glyph is included in compiled output.
    pub export: bool,
    /// OpenType category (e.g. "base", "mark", "ligature"), if assigned.
    pub opentype_category: Option<String>,
    /// Production (PostScript) name, if it differs from the working name.
    pub postscript_name: Option<String>,
    /// Unicode code points, in assignment order. Order is meaningful and
    /// duplicates are kept as-is.
    pub unicodes: Vec<u32>,
}

/// Glyph name → record, iterated in insertion order.
///
/// Insertion order is what makes extraction deterministic: the first source
/// processed establishes the ordering of the final CSV.
pub type GlyphDataMap = IndexMap<String, GlyphRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_equality_is_structural() {
        let a = GlyphRecord {
            export: true,
            opentype_category: Some("base".into()),
            postscript_name: None,
            unicodes: vec![0x41],
        };
        let mut b = a.clone();
        assert_eq!(a, b);

        b.unicodes = vec![0x41, 0x41];
        assert_ne!(a, b);
    }

    #[test]
    fn test_unicode_order_matters() {
        let a = GlyphRecord { unicodes: vec![0x41, 0x42], ..Default::default() };
        let b = GlyphRecord { unicodes: vec![0x42, 0x41], ..Default::default() };
        assert_ne!(a, b);
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let mut map = GlyphDataMap::default();
        map.insert("b".to_string(), GlyphRecord::default());
        map.insert("a".to_string(), GlyphRecord::default());
        let names: Vec<_> = map.keys().cloned().collect();
        assert_eq!(names, ["b", "a"]);
    }
}
