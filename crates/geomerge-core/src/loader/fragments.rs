// crates/geomerge-core/src/loader/fragments.rs

//! # Fragment Scanner
//!
//! The historical source format is not a standalone JSON document: each
//! record sits on its own line as `"properties": { ... }`. Wrapping such a
//! line in braces turns it back into a parseable object.
//!
//! This breaks on records that span lines or contain literal braces inside
//! string values. Prefer [`PropertyTable::from_document`] when the source
//! is a well-formed GeoJSON document.

use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{MergeError, Result};
use crate::model::PROPERTIES_KEY;
use crate::table::PropertyTable;

impl PropertyTable {
    /// **Fragment Loader:** Builds the table by scanning `path` line by line.
    ///
    /// Lines without the literal substring `properties` are ignored. Each
    /// retained line is wrapped in `{`/`}` and parsed; the object under
    /// `properties` becomes the record, keyed by its `nam` value.
    pub fn from_fragments(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(super::common_io::open_stream(path.as_ref())?);
        let mut table = PropertyTable::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(MergeError::Io)?;
            if !line.contains(PROPERTIES_KEY) {
                continue;
            }
            let lineno = idx + 1;

            // Reconstruct a standalone object from the bare `"key": value` line.
            let wrapped = format!("{{{line}}}");
            let mut object: Map<String, Value> = serde_json::from_str(&wrapped)
                .map_err(|e| MergeError::Fragment {
                    line: lineno,
                    source: e,
                })?;

            let record = match object.remove(PROPERTIES_KEY) {
                Some(Value::Object(record)) => record,
                _ => {
                    return Err(MergeError::MissingKey {
                        key: PROPERTIES_KEY,
                        context: format!("fragment line {lineno}"),
                    })
                }
            };

            table.insert(record, &format!("fragment line {lineno}"))?;
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fragment_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.geojson");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_retained_lines_into_records() {
        let (_dir, path) = fragment_file(concat!(
            "{ \"type\": \"FeatureCollection\"\n",
            "\"properties\": { \"nam\": \"Tochigi Ken\", \"nam_ja\": \"栃木県\", \"id\": 9 }\n",
            "\"geometry\": null\n",
            "\"properties\": { \"nam\": \"Gunma Ken\", \"id\": 10 }\n",
        ));
        let table = PropertyTable::from_fragments(&path).unwrap();

        assert_eq!(table.len(), 2);
        let record = table.get("Tochigi Ken").unwrap();
        assert_eq!(record["nam"], "Tochigi Ken");
        assert_eq!(record["nam_ja"], "栃木県");
        assert_eq!(record["id"], 9);
    }

    #[test]
    fn ignores_lines_without_the_marker() {
        let (_dir, path) = fragment_file("just a line\nanother line\n");
        let table = PropertyTable::from_fragments(&path).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let (_dir, path) = fragment_file(concat!(
            "\"properties\": { \"nam\": \"Tochigi Ken\" }\n",
            "\"properties\": { \"nam\": \"Gunma Ken\"\n",
        ));
        let err = PropertyTable::from_fragments(&path).unwrap_err();
        assert!(matches!(err, MergeError::Fragment { line: 2, .. }));
    }

    #[test]
    fn record_without_name_is_an_error() {
        let (_dir, path) = fragment_file("\"properties\": { \"id\": 9 }\n");
        let err = PropertyTable::from_fragments(&path).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: "nam", .. }));
    }

    #[test]
    fn marker_inside_string_without_the_key_is_an_error() {
        let (_dir, path) = fragment_file("\"note\": \"has properties in text\"\n");
        let err = PropertyTable::from_fragments(&path).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: "properties", .. }));
    }
}
