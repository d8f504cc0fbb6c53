use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Read access to the datasets currently available to the editor.
///
/// Implementations are consulted on every candidate computation, so they should
/// return whatever snapshot is current at the time of the call.
pub trait DatasetCatalog {
    /// Dataset keys in the order they should be offered.
    fn dataset_keys(&self) -> Vec<String>;
}

/// A dataset collection as delivered by the hosting page: key to opaque metadata.
///
/// Keys are offered in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetCollection {
    datasets: BTreeMap<String, serde_json::Value>,
}

impl DatasetCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object mapping dataset keys to metadata.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, key: impl Into<String>, metadata: serde_json::Value) {
        self.datasets.insert(key.into(), metadata);
    }

    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.datasets.get(key)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl<K: Into<String>> FromIterator<K> for DatasetCollection {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            datasets: iter
                .into_iter()
                .map(|key| (key.into(), serde_json::Value::Null))
                .collect(),
        }
    }
}

impl DatasetCatalog for DatasetCollection {
    fn dataset_keys(&self) -> Vec<String> {
        self.datasets.keys().cloned().collect()
    }
}
