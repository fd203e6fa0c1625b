// crates/geomerge-core/src/table.rs

//! # Property Table
//!
//! The in-memory lookup built from a source document, keyed by each
//! record's `nam` value. Built once, read-only afterwards.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{MergeError, Result};
use crate::model::{FeatureCollection, PropertyRecord, NAME_KEY, PROPERTIES_KEY};

#[derive(Debug, Default, Clone)]
pub struct PropertyTable {
    records: HashMap<String, PropertyRecord>,
}

impl PropertyTable {
    /// Looks up the full record for a name.
    pub fn get(&self, nam: &str) -> Option<&PropertyRecord> {
        self.records.get(nam)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the known names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// **Document Loader:** Parses the source as a complete GeoJSON
    /// feature collection and collects every feature's property record.
    ///
    /// This is the robust path: no line reconstruction, so malformed
    /// fragments cannot occur. The source is the authority for the table,
    /// so a feature without `properties` or without a `nam` is an error
    /// here too.
    pub fn from_document(path: impl AsRef<Path>) -> Result<Self> {
        let collection = FeatureCollection::load(path)?;
        Self::from_collection(&collection)
    }

    /// Collects each feature's property record out of an already parsed
    /// collection. See [`PropertyTable::from_document`].
    pub fn from_collection(collection: &FeatureCollection) -> Result<Self> {
        let mut table = Self::default();
        for (idx, feature) in collection.features.iter().enumerate() {
            let record = feature.properties.as_ref().ok_or_else(|| MergeError::MissingKey {
                key: PROPERTIES_KEY,
                context: format!("source feature {idx}"),
            })?;
            table.insert(record.clone(), &format!("source feature {idx}"))?;
        }
        Ok(table)
    }

    /// Keys `record` by its `nam` value. Later records for the same name
    /// overwrite earlier ones.
    pub(crate) fn insert(&mut self, record: PropertyRecord, context: &str) -> Result<()> {
        let nam = match record.get(NAME_KEY).and_then(Value::as_str) {
            Some(nam) => nam.to_string(),
            None => {
                return Err(MergeError::MissingKey {
                    key: NAME_KEY,
                    context: context.to_string(),
                })
            }
        };
        self.records.insert(nam, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(json: &str) -> FeatureCollection {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn collects_records_keyed_by_name() {
        let source = collection(
            r#"{"features":[
                {"properties":{"nam":"Tochigi Ken","nam_ja":"栃木県","id":9}},
                {"properties":{"nam":"Gunma Ken","id":10}}
            ]}"#,
        );
        let table = PropertyTable::from_collection(&source).unwrap();

        assert_eq!(table.len(), 2);
        let record = table.get("Tochigi Ken").unwrap();
        assert_eq!(record["nam_ja"], "栃木県");
        assert_eq!(record["id"], 9);
    }

    #[test]
    fn later_record_for_same_name_wins() {
        let source = collection(
            r#"{"features":[
                {"properties":{"nam":"Tochigi Ken","id":1}},
                {"properties":{"nam":"Tochigi Ken","id":2}}
            ]}"#,
        );
        let table = PropertyTable::from_collection(&source).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Tochigi Ken").unwrap()["id"], 2);
    }

    #[test]
    fn feature_without_properties_is_an_error() {
        let source = collection(r#"{"features":[{"type":"Feature"}]}"#);
        let err = PropertyTable::from_collection(&source).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: "properties", .. }));
    }

    #[test]
    fn record_without_name_is_an_error() {
        let source = collection(r#"{"features":[{"properties":{"id":9}}]}"#);
        let err = PropertyTable::from_collection(&source).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: "nam", .. }));
    }

    #[test]
    fn non_string_name_is_an_error() {
        let source = collection(r#"{"features":[{"properties":{"nam":9}}]}"#);
        let err = PropertyTable::from_collection(&source).unwrap_err();
        assert!(matches!(err, MergeError::MissingKey { key: "nam", .. }));
    }
}
