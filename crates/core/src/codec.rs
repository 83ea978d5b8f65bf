//! CSV serialization of glyph-data maps.
//!
//! Fixed five-column schema; the header row is mandatory and must match
//! exactly. Code points travel as uppercase hex fields of at least four
//! digits, space-separated.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use csv::{ReaderBuilder, WriterBuilder};

use crate::{
    GlyphDataMap, GlyphRecord,
    error::{GlyphDataError, Result},
};

/// The exact header row, in column order.
pub const HEADER: [&str; 5] =
    ["name", "postscript_name", "unicodes", "opentype_category", "export"];

fn format_unicodes(unicodes: &[u32]) -> String {
    unicodes.iter().map(|cp| format!("{cp:04X}")).collect::<Vec<_>>().join(" ")
}

fn parse_unicodes(glyph: &str, field: &str) -> Result<Vec<u32>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field
        .split(' ')
        .map(|token| {
            u32::from_str_radix(token, 16).map_err(|_| GlyphDataError::Codepoint {
                glyph: glyph.to_string(),
                token: token.to_string(),
            })
        })
        .collect()
}

fn non_empty(field: &str) -> Option<String> {
    if field.is_empty() { None } else { Some(field.to_string()) }
}

/// Write `data` as CSV, one row per glyph in map order.
pub fn write_csv<W: Write>(data: &GlyphDataMap, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for (glyph, record) in data {
        csv_writer.write_record([
            glyph.as_str(),
            record.postscript_name.as_deref().unwrap_or(""),
            &format_unicodes(&record.unicodes),
            record.opentype_category.as_deref().unwrap_or(""),
            if record.export { "True" } else { "False" },
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `data` to a CSV file, creating or truncating it.
pub fn write_csv_path(data: &GlyphDataMap, path: &Path) -> Result<()> {
    write_csv(data, File::create(path)?)
}

/// Read a glyph-data map back from CSV.
///
/// The header is validated before any data row is touched. Duplicate glyph
/// names overwrite earlier rows (last-row-wins). The `export` column is
/// lenient: anything that is not `true` (case-insensitive) reads as false.
pub fn read_csv<R: Read>(reader: R) -> Result<GlyphDataMap> {
    let mut csv_reader = ReaderBuilder::new().from_reader(reader);

    let header = csv_reader.headers()?;
    if header.iter().ne(HEADER) {
        return Err(GlyphDataError::Header {
            expected: HEADER.join(", "),
            found: header.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut data = GlyphDataMap::default();
    for row in csv_reader.records() {
        let row = row?;
        let glyph = row.get(0).unwrap_or_default().to_string();
        let record = GlyphRecord {
            export: row.get(4).unwrap_or_default().eq_ignore_ascii_case("true"),
            opentype_category: non_empty(row.get(3).unwrap_or_default()),
            postscript_name: non_empty(row.get(1).unwrap_or_default()),
            unicodes: parse_unicodes(&glyph, row.get(2).unwrap_or_default())?,
        };
        data.insert(glyph, record);
    }
    Ok(data)
}

/// Read a glyph-data map from a CSV file.
pub fn read_csv_path(path: &Path) -> Result<GlyphDataMap> {
    read_csv(File::open(path)?)
}
