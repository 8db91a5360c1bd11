//! Hierarchical template dataset.
//!
//! A dataset is a JSON object whose `"faker"` member holds nested objects
//! keyed by dotted path segments. Leaves are strings or lists of strings:
//!
//! ```json
//! { "faker": { "name": { "first_name": ["Ada", "Alan"],
//!                        "name": ["#{first_name} #{last_name}"] } } }
//! ```
//!
//! The process-wide dataset is loaded once, on first use, and never changes
//! afterwards. A failed load degrades to an empty dataset; every lookup
//! against it fails with [`FakerError::AbsentData`].

use std::ffi::OsStr;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DatasetError, FakerError};

/// Environment variable naming a dataset file for [`Dataset::global`].
pub const DATA_ENV_VAR: &str = "FX_FAKER_DATA";

/// Member of the root object that holds all data.
const ROOT_KEY: &str = "faker";

const BUNDLED: &str = include_str!("../data/fakes.json");

static GLOBAL: OnceLock<Dataset> = OnceLock::new();

/// Immutable template dataset.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    root: Map<String, Value>,
}

/// Shape of the node a key resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// A single string.
    Scalar(&'a str),
    /// An ordered list of strings; one is picked per lookup.
    List(Vec<&'a str>),
    /// A nested mapping: the key stopped short of a leaf.
    Object(&'a Map<String, Value>),
}

impl Dataset {
    /// Dataset with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a dataset from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Wrap an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(DatasetError::NotAnObject),
        }
    }

    /// The small English dataset shipped with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json_str(BUNDLED)
    }

    /// The process-wide dataset, loaded on first call.
    ///
    /// Loads the file named by `FX_FAKER_DATA` if set, otherwise the
    /// bundled dataset.
    pub fn global() -> &'static Dataset {
        GLOBAL.get_or_init(Self::load_default)
    }

    /// Choose the process-wide dataset. Only succeeds before the first
    /// call to [`Dataset::global`]; otherwise hands the dataset back.
    pub fn install_global(dataset: Dataset) -> Result<(), Dataset> {
        GLOBAL.set(dataset)
    }

    fn load_default() -> Self {
        Self::load_from(std::env::var_os(DATA_ENV_VAR).as_deref())
    }

    /// The file at `path`, or the bundled dataset when there is none.
    /// Degrades to an empty dataset on any load failure.
    fn load_from(path: Option<&OsStr>) -> Self {
        let loaded = match path {
            Some(path) => {
                tracing::debug!("Loading faker dataset from {:?}", path);
                Self::from_path(path)
            }
            None => Self::bundled(),
        };

        loaded.unwrap_or_else(|e| {
            tracing::warn!("Faker dataset unavailable, using an empty one: {}", e);
            Self::empty()
        })
    }

    /// Resolve a dotted key to the node it names.
    pub fn node(&self, key: &str) -> Result<Node<'_>, FakerError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(FakerError::InvalidPath {
                key: key.to_string(),
            });
        }

        let mut current = match self.root.get(ROOT_KEY) {
            Some(Value::Object(data)) => data,
            _ => return Err(FakerError::AbsentData),
        };

        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            let found = current.get(segment).ok_or_else(|| FakerError::AbsentPath {
                key: key.to_string(),
            })?;

            match found {
                Value::Object(object) => current = object,
                leaf if segments.peek().is_none() => return classify(key, leaf),
                // A leaf with segments left over: nothing below it.
                _ => {
                    return Err(FakerError::AbsentPath {
                        key: key.to_string(),
                    })
                }
            }
        }

        Ok(Node::Object(current))
    }
}

fn classify<'a>(key: &str, value: &'a Value) -> Result<Node<'a>, FakerError> {
    match value {
        Value::String(s) => Ok(Node::Scalar(s)),
        Value::Array(items) => items
            .iter()
            .map(Value::as_str)
            .collect::<Option<Vec<_>>>()
            .map(Node::List)
            .ok_or_else(|| FakerError::WrongDataFormat {
                key: key.to_string(),
            }),
        Value::Object(object) => Ok(Node::Object(object)),
        _ => Err(FakerError::WrongDataFormat {
            key: key.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn dataset() -> Dataset {
        Dataset::from_value(json!({
            "faker": {
                "name": {
                    "first_name": ["Ada", "Alan"],
                    "title": { "job": "Engineer" },
                    "nickname": "Ace",
                    "empty": [],
                    "age": 42,
                    "mixed": ["a", 1]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_scalar_node() {
        let data = dataset();
        assert_eq!(data.node("name.nickname"), Ok(Node::Scalar("Ace")));
    }

    #[test]
    fn test_list_node() {
        let data = dataset();
        assert_eq!(
            data.node("name.first_name"),
            Ok(Node::List(vec!["Ada", "Alan"]))
        );
        assert_eq!(data.node("name.empty"), Ok(Node::List(vec![])));
    }

    #[test]
    fn test_object_node() {
        let data = dataset();
        assert!(matches!(data.node("name.title"), Ok(Node::Object(_))));
        assert!(matches!(data.node("name"), Ok(Node::Object(_))));
    }

    #[test]
    fn test_absent_path() {
        let data = dataset();
        assert_eq!(
            data.node("missing.key"),
            Err(FakerError::AbsentPath {
                key: "missing.key".to_string()
            })
        );
        assert_eq!(
            data.node("name.nickname.more"),
            Err(FakerError::AbsentPath {
                key: "name.nickname.more".to_string()
            })
        );
    }

    #[test]
    fn test_invalid_path() {
        let data = dataset();
        assert!(matches!(data.node(""), Err(FakerError::InvalidPath { .. })));
        assert!(matches!(
            data.node("name..first_name"),
            Err(FakerError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_wrong_data_format() {
        let data = dataset();
        assert!(matches!(
            data.node("name.age"),
            Err(FakerError::WrongDataFormat { .. })
        ));
        assert!(matches!(
            data.node("name.mixed"),
            Err(FakerError::WrongDataFormat { .. })
        ));
    }

    #[test]
    fn test_empty_dataset_is_absent_data() {
        let data = Dataset::empty();
        assert_eq!(data.node("name.first_name"), Err(FakerError::AbsentData));
    }

    #[test]
    fn test_from_value_requires_object() {
        assert!(matches!(
            Dataset::from_value(json!(["not", "an", "object"])),
            Err(DatasetError::NotAnObject)
        ));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            Dataset::from_json_str("{ not json"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"faker": {{"car": {{"brand": ["Volvo"]}}}}}}"#).unwrap();

        let data = Dataset::from_path(file.path()).unwrap();
        assert_eq!(data.node("car.brand"), Ok(Node::List(vec!["Volvo"])));
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let data = Dataset::load_from(Some(missing.as_os_str()));
        assert_eq!(data, Dataset::empty());
        assert_eq!(data.node("name.first_name"), Err(FakerError::AbsentData));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"faker": {{"car": {{"brand": "Volvo"}}}}}}"#).unwrap();

        let data = Dataset::load_from(Some(file.path().as_os_str()));
        assert!(matches!(data.node("car.brand"), Ok(Node::Scalar("Volvo"))));
        assert_eq!(
            data.node("name.first_name"),
            Err(FakerError::AbsentPath {
                key: "name.first_name".to_string()
            })
        );
    }

    #[test]
    fn test_load_without_path_is_bundled() {
        assert_eq!(Dataset::load_from(None), Dataset::bundled().unwrap());
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let data = Dataset::bundled().unwrap();
        assert!(matches!(data.node("name.first_name"), Ok(Node::List(_))));
    }
}
