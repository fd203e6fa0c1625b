// crates/geomerge-core/src/merge.rs

//! # Merge Pipeline
//!
//! Replaces each eligible feature's property bag with the full record from
//! the property table, then writes the result. One pass, original order.

use std::path::Path;

use crate::error::{MergeError, Result};
use crate::model::{FeatureCollection, MergeStats};
use crate::table::PropertyTable;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// How the source file providing the property records is read.
#[derive(Debug, Clone, Copy)]
pub enum SourceFormat {
    /// A complete GeoJSON feature collection (the robust default).
    Document,
    /// One `"properties": { ... }` fragment per line.
    Fragments,
}

// -----------------------------------------------------------------------------
// MERGE
// -----------------------------------------------------------------------------

/// Replaces each eligible feature's properties with the table's full record.
///
/// A feature is eligible when its properties carry a string `nam`. The whole
/// property bag is replaced, never merged key by key. Features without a
/// `nam` are left untouched, and feature order is preserved.
///
/// A `nam` with no table entry aborts the merge with
/// [`MergeError::UnknownName`]; combined with the staged writer this means a
/// failed run never produces an output file.
pub fn merge_properties(
    collection: &mut FeatureCollection,
    table: &PropertyTable,
) -> Result<MergeStats> {
    let features = collection.features.len();
    let mut merged = 0;

    for feature in &mut collection.features {
        let record = match feature.nam() {
            Some(nam) => table
                .get(nam)
                .ok_or_else(|| MergeError::UnknownName(nam.to_string()))?,
            None => continue,
        };
        feature.properties = Some(record.clone());
        merged += 1;
    }

    Ok(MergeStats {
        features,
        merged,
        untouched: features - merged,
    })
}

/// Runs the whole pipeline: build the table from `source_path`, load the
/// collection at `target_path`, merge, and write compactly to `out_path`.
pub fn merge_documents(
    source_path: &Path,
    target_path: &Path,
    out_path: &Path,
    format: SourceFormat,
) -> Result<MergeStats> {
    let table = match format {
        SourceFormat::Document => PropertyTable::from_document(source_path)?,
        SourceFormat::Fragments => PropertyTable::from_fragments(source_path)?,
    };

    let mut collection = FeatureCollection::load(target_path)?;
    let stats = merge_properties(&mut collection, &table)?;
    collection.save_as(out_path)?;

    Ok(stats)
}
