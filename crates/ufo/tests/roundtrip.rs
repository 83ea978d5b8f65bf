//! On-disk round trip: build a UFO with norad, sync metadata through the
//! core, and check what lands back in the saved lib.

use std::{collections::BTreeMap, path::PathBuf};

use glyphdata_core::{FontSource, GlyphRecord, aggregate, apply};
use glyphdata_ufo::{POSTSCRIPT_NAMES_KEY, SKIP_EXPORT_KEY, UfoSource};
use plist::Value;

fn write_test_ufo(dir: &std::path::Path) -> PathBuf {
    let mut font = norad::Font::new();
    let layer = font.default_layer_mut();

    let mut a = norad::Glyph::new("A");
    a.codepoints.insert('A');
    layer.insert_glyph(a);

    let mut alt = norad::Glyph::new("A.alt");
    alt.codepoints.insert('A');
    layer.insert_glyph(alt);

    let mut postscript_names = plist::Dictionary::new();
    postscript_names.insert("A.alt".to_string(), Value::String("uni0041.alt".to_string()));
    font.lib.insert(POSTSCRIPT_NAMES_KEY.to_string(), Value::Dictionary(postscript_names));
    font.lib.insert(
        SKIP_EXPORT_KEY.to_string(),
        Value::Array(vec![Value::String("A.alt".to_string())]),
    );

    let path = dir.join("Test.ufo");
    font.save(&path).expect("failed to save test UFO");
    path
}

#[test]
fn test_extract_apply_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_test_ufo(dir.path());

    let source = UfoSource::open(&path).unwrap();
    let (data, conflicts) = aggregate(std::slice::from_ref(&source));
    assert!(conflicts.is_empty());

    assert_eq!(data["A"], GlyphRecord {
        export: true,
        opentype_category: None,
        postscript_name: None,
        unicodes: vec![0x41],
    });
    assert_eq!(data["A.alt"], GlyphRecord {
        export: false,
        opentype_category: None,
        postscript_name: Some("uni0041.alt".to_string()),
        unicodes: vec![0x41],
    });

    // Apply the same data back and reload; the lib must be unchanged.
    let mut sources = [source];
    apply(&mut sources, &data).unwrap();

    let reloaded = UfoSource::open(&path).unwrap();
    assert_eq!(
        reloaded.postscript_names(),
        BTreeMap::from([("A.alt".to_string(), "uni0041.alt".to_string())])
    );
    assert_eq!(reloaded.skip_export_glyphs().into_iter().collect::<Vec<_>>(), ["A.alt"]);
    assert!(reloaded.opentype_categories().is_empty());

    let (again, _) = aggregate(std::slice::from_ref(&reloaded));
    assert_eq!(again, data);
}
