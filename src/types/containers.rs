//! Container types: SdfTree, SdfMetadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SdfNode;

/// SDF Tree - top-level container written to `.sdf.json` files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdfTree {
    /// Version string of the crate that wrote the tree
    pub version: String,
    /// Root node
    pub root: SdfNode,
    /// Optional metadata
    pub metadata: Option<SdfMetadata>,
}

impl SdfTree {
    /// Create a new SDF tree
    pub fn new(root: SdfNode) -> Self {
        SdfTree {
            version: crate::VERSION.to_string(),
            root,
            metadata: None,
        }
    }

    /// Create with metadata
    pub fn with_metadata(root: SdfNode, metadata: SdfMetadata) -> Self {
        SdfTree {
            version: crate::VERSION.to_string(),
            root,
            metadata: Some(metadata),
        }
    }

    /// Get total node count
    pub fn node_count(&self) -> u32 {
        self.root.node_count()
    }
}

/// Optional metadata for SDF trees
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SdfMetadata {
    /// Name of the model
    pub name: Option<String>,
    /// Identifier of the node that produced the tree
    pub source_node: Option<String>,
    /// Custom key-value pairs
    pub custom: Option<BTreeMap<String, String>>,
}
