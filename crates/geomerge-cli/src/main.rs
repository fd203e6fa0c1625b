//! geomerge-cli — Command-line interface for geomerge-core
//!
//! This binary merges full property records from a source GeoJSON file into
//! a target feature collection, matching features by their `nam` property,
//! and writes the merged document to a new file.
//!
//! Usage examples
//! --------------
//!
//! - Merge records into a collection
//!   $ geomerge merge -s japan2.geojson -t japan-prefectures.geojson -o merged.geojson
//!
//! - Same, reading the source line by line as `"properties": { ... }` fragments
//!   $ geomerge --fragments merge -s japan2.geojson -t japan-prefectures.geojson -o merged.geojson
//!
//! - Inspect the property table built from a source file
//!   $ geomerge table japan2.geojson
//!
//! Data handling
//! -------------
//!
//! By default the source is parsed as a complete GeoJSON document and each
//! feature's property record enters the table. `--fragments` switches to the
//! historical line-scanning mode. The output is written compactly (no
//! inter-token whitespace, non-ASCII kept literal) and staged through a
//! temporary file, so a failed run never leaves a partial document behind.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use geomerge_core::{merge_documents, PropertyTable, SourceFormat};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let format = if args.fragments {
        SourceFormat::Fragments
    } else {
        SourceFormat::Document
    };

    match args.command {
        Commands::Merge {
            source,
            target,
            output,
        } => {
            let stats = merge_documents(&source, &target, &output, format)?;
            println!("Merge summary:");
            println!("  Features: {}", stats.features);
            println!("  Merged: {}", stats.merged);
            println!("  Untouched: {}", stats.untouched);
            println!("Wrote {}", output.display());
        }

        Commands::Table { source } => {
            let table = match format {
                SourceFormat::Document => PropertyTable::from_document(&source)?,
                SourceFormat::Fragments => PropertyTable::from_fragments(&source)?,
            };

            println!("Property records: {}", table.len());
            let mut names: Vec<&str> = table.names().collect();
            names.sort_unstable();
            for nam in names {
                let keys = table.get(nam).map(|r| r.len()).unwrap_or(0);
                println!("- {nam} ({keys} keys)");
            }
        }
    }

    Ok(())
}
