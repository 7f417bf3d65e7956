//! Node-tree runtime
//!
//! Nodes declare sockets and properties into a [`NodeState`] and compute in
//! [`Node::process`]. A [`NodeTree`] owns node instances, carries values
//! along links and evaluates nodes in dependency order.

mod property;
mod registry;
mod socket;
mod state;

pub use property::Property;
pub use registry::{DummyNode, NodeClass, NodeClassKind, NodeRegistry};
pub use socket::{Socket, SocketKind};
pub use state::NodeState;

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::data::Data;
use crate::error::{NodeError, TreeError};

/// Behavior of a node
pub trait Node: fmt::Debug + Send {
    /// Declare sockets and properties
    fn init(&mut self, state: &mut NodeState);

    /// Read inputs, compute, write outputs
    fn process(&mut self, state: &mut NodeState) -> Result<(), NodeError>;
}

/// A node type that can be registered by identifier
pub trait NodeType: Node + Default + 'static {
    /// Stable identifier used in saved trees
    const IDNAME: &'static str;
    /// Display label
    const LABEL: &'static str;
}

/// Index of a node inside its tree
pub type NodeId = usize;

/// Connection from an output socket to an input socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Producing node
    pub from_node: NodeId,
    /// Output socket name
    pub from_socket: String,
    /// Consuming node
    pub to_node: NodeId,
    /// Input socket name
    pub to_socket: String,
}

#[derive(Debug)]
struct TreeNode {
    idname: String,
    node: Box<dyn Node>,
    state: NodeState,
    error: Option<NodeError>,
}

/// A graph of node instances
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: Vec<TreeNode>,
    links: Vec<Link>,
    watched: BTreeSet<(NodeId, String)>,
}

impl NodeTree {
    /// Empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a registered node class
    pub fn add_node(&mut self, registry: &NodeRegistry, idname: &str) -> Result<NodeId, TreeError> {
        let (node, state) = registry.create(idname)?;
        let id = self.nodes.len();
        debug!(id, idname, "adding node");
        self.nodes.push(TreeNode {
            idname: idname.to_string(),
            node,
            state,
            error: None,
        });
        Ok(id)
    }

    /// Connect an output to an input, replacing any link into that input
    pub fn link(
        &mut self,
        from_node: NodeId,
        from_socket: &str,
        to_node: NodeId,
        to_socket: &str,
    ) -> Result<(), TreeError> {
        self.node(from_node)?.state.output(from_socket)?;
        self.node(to_node)?.state.input(to_socket)?;
        self.links
            .retain(|l| !(l.to_node == to_node && l.to_socket == to_socket));
        self.links.push(Link {
            from_node,
            from_socket: from_socket.to_string(),
            to_node,
            to_socket: to_socket.to_string(),
        });
        self.sync_link_flags();
        Ok(())
    }

    /// Remove the link into an input; returns whether there was one
    pub fn unlink(&mut self, to_node: NodeId, to_socket: &str) -> Result<bool, TreeError> {
        self.node(to_node)?.state.input(to_socket)?;
        let before = self.links.len();
        self.links
            .retain(|l| !(l.to_node == to_node && l.to_socket == to_socket));
        self.sync_link_flags();
        Ok(self.links.len() != before)
    }

    /// Deliver a value to an input from outside the tree
    pub fn feed(&mut self, id: NodeId, input: &str, data: Data) -> Result<(), TreeError> {
        self.node_mut(id)?.state.feed_input(input, data)?;
        Ok(())
    }

    /// Mark an output as consumed from outside the tree
    pub fn watch(&mut self, id: NodeId, output: &str) -> Result<(), TreeError> {
        self.node(id)?.state.output(output)?;
        self.watched.insert((id, output.to_string()));
        self.sync_link_flags();
        Ok(())
    }

    /// Sockets and properties of a node
    pub fn state(&self, id: NodeId) -> Result<&NodeState, TreeError> {
        Ok(&self.node(id)?.state)
    }

    pub(crate) fn state_mut(&mut self, id: NodeId) -> Result<&mut NodeState, TreeError> {
        Ok(&mut self.node_mut(id)?.state)
    }

    /// Value written to an output in the last pass
    pub fn output(&self, id: NodeId, name: &str) -> Result<Option<&Data>, TreeError> {
        Ok(self.node(id)?.state.output(name)?.value())
    }

    /// Error raised by a node in the last pass
    pub fn node_error(&self, id: NodeId) -> Option<&NodeError> {
        self.nodes.get(id).and_then(|n| n.error.as_ref())
    }

    /// Class identifier of a node
    pub fn idname(&self, id: NodeId) -> Result<&str, TreeError> {
        Ok(&self.node(id)?.idname)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All links
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Outputs marked as consumed from outside the tree
    pub fn watched(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.watched.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Change a property and re-evaluate the tree if the value changed
    pub fn set_property(&mut self, id: NodeId, key: &str, value: f32) -> Result<bool, TreeError> {
        let changed = self.node_mut(id)?.state.set_property(key, value)?;
        if changed {
            debug!(id, key, value, "property changed");
            self.update()?;
        }
        Ok(changed)
    }

    /// Evaluate every node once in dependency order
    ///
    /// Values from the previous pass are dropped first. A node that fails
    /// keeps its error (see [`NodeTree::node_error`]) and leaves its outputs
    /// empty; evaluation continues with the remaining nodes.
    pub fn update(&mut self) -> Result<(), TreeError> {
        let order = self.topological_order()?;
        for node in &mut self.nodes {
            node.state.reset_values();
            node.error = None;
        }

        for id in order {
            let incoming: Vec<(String, Option<Data>)> = self
                .links
                .iter()
                .filter(|l| l.to_node == id)
                .map(|l| {
                    let value = self.nodes[l.from_node]
                        .state
                        .output(&l.from_socket)
                        .ok()
                        .and_then(|s| s.value().cloned());
                    (l.to_socket.clone(), value)
                })
                .collect();

            let tree_node = &mut self.nodes[id];
            for (socket, value) in incoming {
                tree_node.state.input_mut(&socket)?.value = value;
            }

            trace!(id, idname = %tree_node.idname, "processing node");
            if let Err(err) = tree_node.node.process(&mut tree_node.state) {
                warn!(id, idname = %tree_node.idname, error = %err, "node failed");
                tree_node.state.reset_values();
                tree_node.error = Some(err);
            }
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> Result<&TreeNode, TreeError> {
        self.nodes.get(id).ok_or(TreeError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut TreeNode, TreeError> {
        self.nodes.get_mut(id).ok_or(TreeError::UnknownNode(id))
    }

    fn sync_link_flags(&mut self) {
        for (id, node) in self.nodes.iter_mut().enumerate() {
            for name in socket_names(node.state.inputs()) {
                let linked = self
                    .links
                    .iter()
                    .any(|l| l.to_node == id && l.to_socket == name);
                if let Ok(socket) = node.state.input_mut(&name) {
                    socket.linked = linked || socket.fed.is_some();
                }
            }
            for name in socket_names(node.state.outputs()) {
                let linked = self
                    .links
                    .iter()
                    .any(|l| l.from_node == id && l.from_socket == name)
                    || self.watched.contains(&(id, name.clone()));
                if let Ok(socket) = node.state.output_mut(&name) {
                    socket.linked = linked;
                }
            }
        }
    }

    fn topological_order(&self) -> Result<Vec<NodeId>, TreeError> {
        let mut in_degree = vec![0usize; self.nodes.len()];
        for link in &self.links {
            in_degree[link.to_node] += 1;
        }
        let mut ready: VecDeque<NodeId> = (0..self.nodes.len())
            .filter(|&id| in_degree[id] == 0)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = ready.pop_front() {
            order.push(id);
            for link in self.links.iter().filter(|l| l.from_node == id) {
                in_degree[link.to_node] -= 1;
                if in_degree[link.to_node] == 0 {
                    ready.push_back(link.to_node);
                }
            }
        }
        if order.len() != self.nodes.len() {
            return Err(TreeError::Cycle);
        }
        Ok(order)
    }
}

fn socket_names(sockets: &[Socket]) -> Vec<String> {
    sockets.iter().map(|s| s.name().to_string()).collect()
}
