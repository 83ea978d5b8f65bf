//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::sync::{apply_csv, extract_to_csv};

#[derive(Parser)]
#[command(name = "glyphdata")]
#[command(about = "Sync glyph metadata between UFO sources and a CSV file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract glyph metadata from one or more UFOs into a CSV file.
    Extract {
        /// UFO sources, processed in order (the first one to mention a
        /// glyph wins).
        #[arg(required = true)]
        ufos: Vec<PathBuf>,
        /// Output CSV path; standard output if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Restrict output to glyph names listed in this file, one per line.
        #[arg(long)]
        glyph_list: Option<PathBuf>,
        /// Delete the extracted metadata from the UFOs afterwards.
        #[arg(long)]
        remove_from_ufo: bool,
    },
    /// Apply glyph metadata from a CSV file onto one or more UFOs.
    Apply {
        /// Input CSV file.
        csv: PathBuf,
        /// UFO targets; each is overlaid and saved.
        #[arg(required = true)]
        ufos: Vec<PathBuf>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Extract { ufos, output, glyph_list, remove_from_ufo } => {
                extract_to_csv(&ufos, output.as_deref(), glyph_list.as_deref(), remove_from_ufo)
            }
            Commands::Apply { csv, ufos } => apply_csv(&csv, &ufos),
        }
    }
}
