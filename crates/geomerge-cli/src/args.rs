use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geomerge-cli
#[derive(Debug, Parser)]
#[command(
    name = "geomerge",
    version,
    about = "Merge GeoJSON property metadata into a feature collection, keyed by the 'nam' field"
)]
pub struct CliArgs {
    /// Read the source as line-based "properties" fragments instead of a
    /// complete GeoJSON document
    #[arg(long = "fragments", global = true)]
    pub fragments: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge source property records into the target collection
    Merge {
        /// File providing the full property records
        #[arg(short = 's', long = "source")]
        source: PathBuf,

        /// GeoJSON document whose features receive the records
        #[arg(short = 't', long = "target")]
        target: PathBuf,

        /// Where to write the merged document
        #[arg(short = 'o', long = "output")]
        output: PathBuf,
    },

    /// Build only the property table and list its records
    Table {
        /// File providing the full property records
        source: PathBuf,
    },
}
