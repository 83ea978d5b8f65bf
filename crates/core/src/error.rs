use std::{io, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphDataError {
    #[error("unexpected CSV header [{found}], expected [{expected}]")]
    Header { expected: String, found: String },

    #[error("invalid or out-of-range code point '{token}' for glyph '{glyph}'")]
    Codepoint { glyph: String, token: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, GlyphDataError>;
