use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::models::Creator;

/// Errors that can occur while loading the creator dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only provider over the creator dataset
///
/// The dataset is loaded once at process start and shared immutably across
/// request handlers. A load failure is fatal: the service must not serve
/// traffic without data.
#[derive(Debug, Clone)]
pub struct DatasetProvider {
    creators: Arc<[Creator]>,
}

impl DatasetProvider {
    /// Load the dataset from a JSON file containing an array of creators
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: display.clone(),
            source,
        })?;

        let creators: Vec<Creator> =
            serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
                path: display,
                source,
            })?;

        tracing::info!("Loaded {} creators from {}", creators.len(), path.display());

        Ok(Self::from_creators(creators))
    }

    /// Build a provider from an already-loaded creator list
    pub fn from_creators(creators: Vec<Creator>) -> Self {
        Self {
            creators: creators.into(),
        }
    }

    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}
