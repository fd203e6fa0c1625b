// crates/geomerge-core/src/prelude.rs

//! Convenience re-exports for downstream users.

pub use crate::error::{MergeError, Result};
pub use crate::merge::{merge_documents, merge_properties, SourceFormat};
pub use crate::model::{Feature, FeatureCollection, MergeStats, PropertyRecord};
pub use crate::table::PropertyTable;
