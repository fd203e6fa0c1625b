// crates/geomerge-core/src/model.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key identifying a record inside its property bag.
pub const NAME_KEY: &str = "nam";

/// Key under which a feature carries its property bag.
pub const PROPERTIES_KEY: &str = "properties";

/// One feature's property bag: arbitrary JSON keys and values.
///
/// A record eligible for the table must carry a string under [`NAME_KEY`];
/// everything else is opaque payload and travels along untouched.
pub type PropertyRecord = Map<String, Value>;

/// One entry in a feature collection.
///
/// Only `properties` is modeled; `type`, `geometry`, `id` and any other
/// members are captured losslessly in `rest` so the merge never drops
/// data it does not understand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyRecord>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Feature {
    /// Returns this feature's name, if its properties carry a string `nam`.
    pub fn nam(&self) -> Option<&str> {
        self.properties.as_ref()?.get(NAME_KEY)?.as_str()
    }
}

/// The top-level GeoJSON document: an ordered sequence of features.
///
/// Read wholesale into memory, mutated in place, then serialized. Member
/// order of `features` is significant and preserved end to end.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Counts reported after a merge pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MergeStats {
    pub features: usize,
    pub merged: usize,
    pub untouched: usize,
}
