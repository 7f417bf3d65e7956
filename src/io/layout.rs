//! Node-tree layout format (`.nodes.json`)
//!
//! A layout records which node classes a tree contains, their property
//! values, links and watched outputs. Socket values are runtime data and are
//! not saved; a loaded tree is re-evaluated from scratch.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::io::IoError;
use crate::tree::{Link, NodeId, NodeRegistry, NodeTree};

/// One node of a saved layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    /// Node class identifier
    pub idname: String,
    /// Property values by key
    #[serde(default)]
    pub properties: BTreeMap<String, f32>,
}

/// Saved shape of a [`NodeTree`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Version string of the crate that wrote the layout
    pub version: String,
    /// Nodes, indexed by [`NodeId`]
    pub nodes: Vec<NodeEntry>,
    /// Links between nodes
    #[serde(default)]
    pub links: Vec<Link>,
    /// Outputs consumed from outside the tree
    #[serde(default)]
    pub watched: Vec<(NodeId, String)>,
}

impl NodeTree {
    /// Snapshot of the tree's nodes, properties and links
    pub fn to_layout(&self) -> TreeLayout {
        let nodes = (0..self.len())
            .filter_map(|id| {
                let idname = self.idname(id).ok()?.to_string();
                let properties = self
                    .state(id)
                    .ok()?
                    .properties()
                    .iter()
                    .map(|(key, prop)| (key.clone(), prop.value()))
                    .collect();
                Some(NodeEntry { idname, properties })
            })
            .collect();

        TreeLayout {
            version: crate::VERSION.to_string(),
            nodes,
            links: self.links().to_vec(),
            watched: self
                .watched()
                .map(|(id, name)| (id, name.to_string()))
                .collect(),
        }
    }

    /// Rebuild a tree from a layout
    ///
    /// Every node class must be registered. Properties are restored without
    /// triggering evaluation; call [`NodeTree::update`] afterwards.
    ///
    /// Placeholder nodes load without their properties, links and watches,
    /// since they declare no sockets or properties.
    pub fn from_layout(registry: &NodeRegistry, layout: &TreeLayout) -> Result<Self, IoError> {
        let mut tree = NodeTree::new();
        let mut placeholders = BTreeSet::new();
        for entry in &layout.nodes {
            let id = tree.add_node(registry, &entry.idname)?;
            if registry.get(&entry.idname).is_some_and(|c| c.is_dummy()) {
                warn!(
                    id,
                    idname = %entry.idname,
                    properties = entry.properties.len(),
                    "placeholder node, dropping saved properties"
                );
                placeholders.insert(id);
                continue;
            }
            let state = tree.state_mut(id)?;
            for (key, value) in &entry.properties {
                state
                    .set_property(key, *value)
                    .map_err(crate::error::TreeError::from)?;
            }
        }
        for link in &layout.links {
            if placeholders.contains(&link.from_node) || placeholders.contains(&link.to_node) {
                warn!(
                    from = link.from_node,
                    to = link.to_node,
                    "link touches a placeholder node, skipping"
                );
                continue;
            }
            tree.link(link.from_node, &link.from_socket, link.to_node, &link.to_socket)?;
        }
        for (id, output) in &layout.watched {
            if placeholders.contains(id) {
                warn!(id, output = %output, "watched output on a placeholder node, skipping");
                continue;
            }
            tree.watch(*id, output)?;
        }
        debug!(
            nodes = tree.len(),
            links = tree.links().len(),
            "restored node tree"
        );
        Ok(tree)
    }
}

/// Save a tree layout to JSON
pub fn save_layout_json(tree: &NodeTree, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &tree.to_layout())
        .map_err(|e| IoError::Serialization(e.to_string()))
}

/// Load a tree from a JSON layout
pub fn load_layout_json(
    registry: &NodeRegistry,
    path: impl AsRef<Path>,
) -> Result<NodeTree, IoError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let layout: TreeLayout =
        serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))?;
    NodeTree::from_layout(registry, &layout)
}

/// Serialize a tree layout to a JSON string
pub fn to_layout_string(tree: &NodeTree) -> Result<String, IoError> {
    serde_json::to_string_pretty(&tree.to_layout())
        .map_err(|e| IoError::Serialization(e.to_string()))
}

/// Rebuild a tree from a JSON layout string
pub fn from_layout_string(registry: &NodeRegistry, json: &str) -> Result<NodeTree, IoError> {
    let layout: TreeLayout =
        serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))?;
    NodeTree::from_layout(registry, &layout)
}
