//! Canonical document serialization plus the file helpers used by the
//! orchestration boundary. Both pipeline components share this contract,
//! so a merge can directly consume a lowering result.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::definition::model::AppDefinition;
use crate::error::DefinitionError;

/// Serialize a definition document: pretty-printed JSON with keys in
/// struct declaration order, stable across runs for identical input.
pub fn to_json(definition: &AppDefinition) -> Result<String, DefinitionError> {
    let mut text = serde_json::to_string_pretty(definition).map_err(DefinitionError::Document)?;
    text.push('\n');
    Ok(text)
}

/// Read a definition document back. Unknown keys in hand-edited input are
/// ignored; missing optional sections default to empty.
pub fn from_json(text: &str) -> Result<AppDefinition, DefinitionError> {
    serde_json::from_str(text).map_err(DefinitionError::Document)
}

/// Read and parse one JSON input file into its typed shape.
pub fn read_input<T: DeserializeOwned>(path: &Path) -> Result<T, DefinitionError> {
    let text = fs::read_to_string(path).map_err(|source| DefinitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DefinitionError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the finished document, creating parent directories as needed.
/// The document is fully serialized before any byte reaches disk, so a
/// failed run never leaves partial output behind.
pub fn write(path: &Path, definition: &AppDefinition) -> Result<(), DefinitionError> {
    let text = to_json(definition)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| DefinitionError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| DefinitionError::Write {
        path: path.to_path_buf(),
        source,
    })
}
