//! Error handling example for geomerge-rs
//!
//! This example demonstrates proper error handling and edge cases

use geomerge_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoMerge-RS Error Handling Example ===\n");

    let dir = std::env::temp_dir().join("geomerge-error-handling");
    std::fs::create_dir_all(&dir)?;

    // Example 1: Handling a missing source file
    println!("--- Example 1: Missing source file ---");
    match PropertyTable::from_document(dir.join("does-not-exist.geojson")) {
        Ok(_) => println!("  Unexpectedly loaded a table"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: A malformed fragment line
    println!("--- Example 2: Malformed fragment line ---");
    let broken = dir.join("broken.geojson");
    std::fs::write(&broken, "\"properties\": { \"nam\": \"Tochigi Ken\"\n")?;
    match PropertyTable::from_fragments(&broken) {
        Ok(_) => println!("  Unexpectedly parsed the fragment"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 3: A target name missing from the table
    println!("--- Example 3: Unknown name in the target ---");
    let source = dir.join("source.geojson");
    let target = dir.join("target.geojson");
    let output = dir.join("merged.geojson");
    std::fs::write(
        &source,
        r#"{"features":[{"properties":{"nam":"Tochigi Ken","id":9}}]}"#,
    )?;
    std::fs::write(&target, r#"{"features":[{"properties":{"nam":"Atlantis"}}]}"#)?;
    match merge_documents(&source, &target, &output, SourceFormat::Document) {
        Ok(_) => println!("  Unexpectedly merged"),
        Err(MergeError::UnknownName(nam)) => {
            println!("  ✗ No record for '{nam}'");
            println!("  Output file written: {}", output.exists());
        }
        Err(e) => return Err(e),
    }
    println!();

    // Example 4: Successful run for comparison
    println!("--- Example 4: Successful run ---");
    std::fs::write(&target, r#"{"features":[{"properties":{"nam":"Tochigi Ken"}}]}"#)?;
    let stats = merge_documents(&source, &target, &output, SourceFormat::Document)?;
    println!("  ✓ Merged {} of {} features", stats.merged, stats.features);

    Ok(())
}
