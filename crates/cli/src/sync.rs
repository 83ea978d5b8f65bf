//! Command implementations: extraction to CSV and application from CSV.

use std::{
    collections::HashSet,
    fs::read_to_string,
    io::stdout,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glyphdata_core::{GlyphDataMap, aggregate, apply, strip, write_csv, write_csv_path};
use glyphdata_ufo::UfoSource;
use log::warn;

fn open_all(ufos: &[PathBuf]) -> Result<Vec<UfoSource>> {
    ufos.iter().map(UfoSource::open).collect()
}

/// One glyph name per line; blank lines are ignored.
fn read_glyph_list(path: &Path) -> Result<HashSet<String>> {
    let text = read_to_string(path)
        .with_context(|| format!("Failed to read glyph list: {}", path.display()))?;
    Ok(text.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect())
}

/// Drop every glyph not named in `keep`, preserving map order. Listed names
/// with no aggregated record are ignored.
fn retain_listed(data: &mut GlyphDataMap, keep: &HashSet<String>) {
    data.retain(|name, _| keep.contains(name));
}

pub fn extract_to_csv(
    ufos: &[PathBuf],
    output: Option<&Path>,
    glyph_list: Option<&Path>,
    remove_from_ufo: bool,
) -> Result<()> {
    let mut sources = open_all(ufos)?;

    let (mut data, conflicts) = aggregate(&sources);
    for conflict in &conflicts {
        warn!("{conflict}");
    }

    if let Some(list_path) = glyph_list {
        let keep = read_glyph_list(list_path)?;
        retain_listed(&mut data, &keep);
    }

    match output {
        Some(path) => write_csv_path(&data, path)
            .with_context(|| format!("Failed to write CSV: {}", path.display()))?,
        None => write_csv(&data, stdout().lock())?,
    }

    if remove_from_ufo {
        strip(&mut sources)?;
    }
    Ok(())
}

pub fn apply_csv(csv: &Path, ufos: &[PathBuf]) -> Result<()> {
    let data = glyphdata_core::read_csv_path(csv)
        .with_context(|| format!("Failed to read CSV: {}", csv.display()))?;
    let mut sources = open_all(ufos)?;
    apply(&mut sources, &data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use glyphdata_core::GlyphRecord;

    use super::*;

    #[test]
    fn test_glyph_list_ignores_blank_and_padded_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A\n\n  \n  B.alt  \nspace\n").unwrap();

        let keep = read_glyph_list(file.path()).unwrap();
        let expected =
            HashSet::from(["A".to_string(), "B.alt".to_string(), "space".to_string()]);
        assert_eq!(keep, expected);
    }

    #[test]
    fn test_glyph_list_read_failure_is_an_error() {
        assert!(read_glyph_list(Path::new("no-such-list.txt")).is_err());
    }

    #[test]
    fn test_retain_listed_keeps_order_and_skips_unknown_names() {
        let mut data = GlyphDataMap::default();
        for name in ["b", "a", "c"] {
            data.insert(name.to_string(), GlyphRecord::default());
        }
        let keep =
            HashSet::from(["c".to_string(), "b".to_string(), "ghost".to_string()]);

        retain_listed(&mut data, &keep);

        let names: Vec<_> = data.keys().cloned().collect();
        assert_eq!(names, ["b", "c"], "aggregation order survives filtering");
        assert!(!data.contains_key("ghost"), "unlisted records are not invented");
    }
}
