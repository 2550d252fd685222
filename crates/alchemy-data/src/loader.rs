//! Reads catalog and configuration files from disk.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and the
//! deserialization helpers used to turn catalog files into a
//! [`CombinationGraph`].

use alchemy_core::catalog::{self, CatalogError, ElementRecord};
use alchemy_core::graph::CombinationGraph;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading data files.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but its records do not form a valid catalog.
    #[error("invalid catalog {file}: {source}")]
    Catalog { file: PathBuf, source: CatalogError },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without extension).
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// more than one format exists for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(file: &Path, detail: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: file.to_path_buf(),
        detail: detail.to_string(),
    }
}

/// Deserialize text in the given format. `file` is only used for errors.
pub fn deserialize_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<T, DataLoadError> {
    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_error(file, e)),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(file, e)),
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(file, e)),
    }
}

/// Read a file and deserialize it according to its format (detected from extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize_str(&content, format, path)
}

/// Deserialize a list. TOML has no top-level arrays, so for TOML the list
/// is read from the array at `toml_key`; RON and JSON hold a bare list.
pub fn deserialize_list_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    file: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    match format {
        Format::Ron | Format::Json => deserialize_str(content, format, file),
        Format::Toml => {
            let table: toml::Value = toml::from_str(content).map_err(|e| parse_error(file, e))?;
            let array = table
                .get(toml_key)
                .ok_or_else(|| parse_error(file, format!("missing key '{toml_key}' in TOML file")))?
                .clone();
            array
                .try_into()
                .map_err(|e: toml::de::Error| parse_error(file, e))
        }
    }
}

/// Read a file and deserialize a list from it. See [`deserialize_list_str`].
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize_list_str(&content, format, path, toml_key)
}

// ===========================================================================
// Catalogs
// ===========================================================================

/// TOML key holding the `[[elements]]` array of a catalog file.
pub const CATALOG_TOML_KEY: &str = "elements";

/// Read the element records of a catalog file.
pub fn load_records(path: &Path) -> Result<Vec<ElementRecord>, DataLoadError> {
    deserialize_list(path, CATALOG_TOML_KEY)
}

/// Build a graph from catalog text in the given format.
pub fn load_catalog_str(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<CombinationGraph, DataLoadError> {
    let records: Vec<ElementRecord> =
        deserialize_list_str(content, format, file, CATALOG_TOML_KEY)?;
    catalog::load(&records).map_err(|source| DataLoadError::Catalog {
        file: file.to_path_buf(),
        source,
    })
}

/// Read a catalog file and build its graph.
pub fn load_catalog(path: &Path) -> Result<CombinationGraph, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let graph = load_catalog_str(&content, format, path)?;
    tracing::debug!(file = %path.display(), elements = graph.len(), "catalog file loaded");
    Ok(graph)
}

// ===========================================================================
// Tests
// ===========================================================================
