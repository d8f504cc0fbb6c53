use crate::error::CatalogError;
use serde::Deserialize;
use std::fs;

/// The process types available for placement.
pub trait ProcessCatalog {
    /// Process identifiers, in palette order.
    fn process_ids(&self) -> &[String];

    fn contains(&self, process: &str) -> bool {
        self.process_ids().iter().any(|p| p == process)
    }
}

/// The draggable palette, fixed when the editor is created.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProcessPalette {
    processes: Vec<String>,
}

impl ProcessPalette {
    pub fn new<I, S>(processes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            processes: processes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a JSON array of process identifiers.
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
}

impl ProcessCatalog for ProcessPalette {
    fn process_ids(&self) -> &[String] {
        &self.processes
    }
}
