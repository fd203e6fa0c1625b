//! Basic usage example for geomerge-rs
//!
//! This example demonstrates how to:
//! - Build a property table from a source document
//! - Merge the table's records into a target collection
//! - Write the merged document compactly

use geomerge_rs::prelude::*;

const SOURCE: &str = r#"{ "type": "FeatureCollection", "features": [
{ "type": "Feature",
"properties": { "nam": "Tochigi Ken", "nam_ja": "栃木県", "id": 9 }
},
{ "type": "Feature",
"properties": { "nam": "Gunma Ken", "nam_ja": "群馬県", "id": 10 }
}
] }"#;

const TARGET: &str = r#"{"type":"FeatureCollection","features":[
{"type":"Feature","properties":{"nam":"Tochigi Ken"},"geometry":null},
{"type":"Feature","properties":{"nam":"Gunma Ken"},"geometry":null}
]}"#;

fn main() -> Result<()> {
    println!("=== GeoMerge-RS Basic Usage Example ===\n");

    let dir = std::env::temp_dir().join("geomerge-basic-usage");
    std::fs::create_dir_all(&dir)?;
    let source = dir.join("source.geojson");
    let target = dir.join("target.geojson");
    let output = dir.join("merged.geojson");
    std::fs::write(&source, SOURCE)?;
    std::fs::write(&target, TARGET)?;

    // Example 1: Build the property table
    println!("--- Example 1: Build the property table ---");
    let table = PropertyTable::from_document(&source)?;
    println!("Records in table: {}", table.len());
    for nam in table.names() {
        println!("- {nam}");
    }
    println!();

    // Example 2: Merge into the target collection
    println!("--- Example 2: Merge into the target collection ---");
    let mut collection = FeatureCollection::load(&target)?;
    let stats = merge_properties(&mut collection, &table)?;
    println!("Features: {}", stats.features);
    println!("Merged: {}", stats.merged);
    println!("Untouched: {}", stats.untouched);
    println!();

    // Example 3: Write the merged document
    println!("--- Example 3: Write the merged document ---");
    collection.save_as(&output)?;
    println!("Wrote {}", output.display());
    println!("{}", std::fs::read_to_string(&output)?);
    println!();

    // Example 4: The same pipeline in one call, fragment mode
    println!("--- Example 4: One-call pipeline, fragment mode ---");
    let stats = merge_documents(&source, &target, &output, SourceFormat::Fragments)?;
    println!("Merged {} of {} features", stats.merged, stats.features);

    Ok(())
}
