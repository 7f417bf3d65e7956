//! File I/O
//!
//! Supports two documents:
//! - `.sdf.json`: a serialized [`SdfTree`](crate::types::SdfTree), e.g. the
//!   output of the extrude node
//! - `.nodes.json`: a node-tree layout (node classes, property values, links)

#[cfg(feature = "sdf")]
mod json;
mod layout;

#[cfg(feature = "sdf")]
pub use json::{from_json_string, load_sdf_json, save_field, save_sdf_json, to_json_string};
pub use layout::{
    from_layout_string, load_layout_json, save_layout_json, to_layout_string, NodeEntry,
    TreeLayout,
};

#[cfg(feature = "sdf")]
use crate::types::SdfTree;
#[cfg(feature = "sdf")]
use std::path::Path;
use thiserror::Error;

use crate::error::TreeError;

/// File I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The value only exists in memory
    #[error("Not serializable: {0}")]
    NotSerializable(String),

    /// Rebuilding a node tree failed
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Save an SDF tree, choosing the format from the extension
#[cfg(feature = "sdf")]
pub fn save(tree: &SdfTree, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    if path.to_string_lossy().ends_with(".sdf.json") {
        save_sdf_json(tree, path)
    } else {
        Err(IoError::InvalidFormat(
            "Unknown file extension. Use .sdf.json".to_string(),
        ))
    }
}

/// Load an SDF tree, choosing the format from the extension
#[cfg(feature = "sdf")]
pub fn load(path: impl AsRef<Path>) -> Result<SdfTree, IoError> {
    let path = path.as_ref();
    if path.to_string_lossy().ends_with(".sdf.json") {
        load_sdf_json(path)
    } else {
        Err(IoError::InvalidFormat(
            "Unknown file extension. Use .sdf.json".to_string(),
        ))
    }
}

/// Short description of a saved SDF tree
#[cfg(feature = "sdf")]
pub fn get_info(path: impl AsRef<Path>) -> Result<String, IoError> {
    let tree = load(path)?;
    let mut info = format!(
        "Format: SDF JSON\nVersion: {}\nNode count: {}\nRoot: {:?}",
        tree.version,
        tree.node_count(),
        tree.root.category()
    );
    if let Some(name) = tree.metadata.as_ref().and_then(|m| m.name.as_deref()) {
        info.push_str(&format!("\nName: {}", name));
    }
    Ok(info)
}
