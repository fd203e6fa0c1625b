// crates/geomerge-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (whole-document vs line fragments).

use std::path::Path;

use crate::error::{MergeError, Result};
use crate::model::FeatureCollection;

mod common_io;
mod fragments;

pub use common_io::open_stream;

impl FeatureCollection {
    /// Reads a GeoJSON document wholesale.
    ///
    /// With the `compact` feature enabled, a `.gz` path is transparently
    /// decompressed while reading.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = common_io::open_stream(path.as_ref())?;
        serde_json::from_reader(reader).map_err(MergeError::Json)
    }
}
