//! Error types for dataset loading and template resolution.

use std::path::PathBuf;

/// Failure to resolve a key or expand a template.
///
/// All variants are value-level: the [`Faker`](crate::Faker) facade turns
/// any of them into a fallback string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FakerError {
    #[error("Dataset has no faker data")]
    AbsentData,

    #[error("Empty value for key: {key}")]
    EmptyValue { key: String },

    #[error("Empty data array for key: {key}")]
    EmptyDataArray { key: String },

    #[error("Unsupported data format for key: {key}")]
    WrongDataFormat { key: String },

    #[error("Invalid path: {key:?}")]
    InvalidPath { key: String },

    #[error("Path not found: {key}")]
    AbsentPath { key: String },

    #[error("Path does not reach a value: {key}")]
    IncompletePath { key: String },

    #[error("Template scan failed: {0}")]
    Other(#[from] ScanError),
}

/// Failure of the placeholder scanner itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Placeholder nesting deeper than {depth_max} levels in template {template:?}")]
    TooDeep { template: String, depth_max: usize },
}

/// Failure to load a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset root must be a JSON object")]
    NotAnObject,
}
