//! SDF JSON format
//!
//! Human-readable JSON representation of SDF trees, written and read through
//! buffered streams.

use crate::field::SdfScalarField;
use crate::io::IoError;
use crate::types::{SdfMetadata, SdfTree};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Save an SDF tree to JSON format
pub fn save_sdf_json(tree: &SdfTree, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, tree).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Load an SDF tree from JSON format
pub fn load_sdf_json(path: impl AsRef<Path>) -> Result<SdfTree, IoError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Serialize an SDF tree to a JSON string
pub fn to_json_string(tree: &SdfTree) -> Result<String, IoError> {
    serde_json::to_string_pretty(tree).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Parse an SDF tree from a JSON string
pub fn from_json_string(json: &str) -> Result<SdfTree, IoError> {
    serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Save the SDF behind a field produced by a node
///
/// Fields extruded from generic (non-SDF) profiles only exist in memory and
/// are rejected.
pub fn save_field(
    field: &SdfScalarField,
    source_node: &str,
    path: impl AsRef<Path>,
) -> Result<(), IoError> {
    let tree = field.to_tree().ok_or_else(|| {
        IoError::NotSerializable("field profile is not an SDF tree".to_string())
    })?;
    let metadata = SdfMetadata {
        source_node: Some(source_node.to_string()),
        ..SdfMetadata::default()
    };
    save_sdf_json(&SdfTree::with_metadata(tree.root, metadata), path)
}
