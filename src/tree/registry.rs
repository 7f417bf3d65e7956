//! Node class registry
//!
//! Node types are registered under a stable identifier. When a node's
//! backing library is missing, an inert [`DummyNode`] is registered under
//! the same identifier so saved trees still load.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use super::{Node, NodeState, NodeType};
use crate::error::{NodeError, RegistryError};

/// How instances of a registered class are made
#[derive(Clone, Copy)]
pub enum NodeClassKind {
    /// Working implementation
    Real(fn() -> Box<dyn Node>),
    /// Inert placeholder standing in for a node whose dependency is missing
    Dummy {
        /// Name of the missing dependency
        dependency: &'static str,
    },
}

impl fmt::Debug for NodeClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeClassKind::Real(_) => f.write_str("Real"),
            NodeClassKind::Dummy { dependency } => {
                f.debug_struct("Dummy").field("dependency", dependency).finish()
            }
        }
    }
}

/// A registered node class
#[derive(Debug, Clone, Copy)]
pub struct NodeClass {
    /// Stable identifier
    pub idname: &'static str,
    /// Display label
    pub label: &'static str,
    /// Factory
    pub kind: NodeClassKind,
}

impl NodeClass {
    /// Whether this class is a placeholder
    pub fn is_dummy(&self) -> bool {
        matches!(self.kind, NodeClassKind::Dummy { .. })
    }
}

/// Registered node classes keyed by identifier
#[derive(Debug, Default)]
pub struct NodeRegistry {
    classes: BTreeMap<&'static str, NodeClass>,
}

impl NodeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class
    pub fn register_class(&mut self, class: NodeClass) -> Result<(), RegistryError> {
        if self.classes.contains_key(class.idname) {
            return Err(RegistryError::AlreadyRegistered(class.idname.to_string()));
        }
        debug!(idname = class.idname, dummy = class.is_dummy(), "registering node class");
        self.classes.insert(class.idname, class);
        Ok(())
    }

    /// Register a node type
    pub fn register<T: NodeType>(&mut self) -> Result<(), RegistryError> {
        fn make<T: NodeType>() -> Box<dyn Node> {
            Box::new(T::default())
        }
        self.register_class(NodeClass {
            idname: T::IDNAME,
            label: T::LABEL,
            kind: NodeClassKind::Real(make::<T>),
        })
    }

    /// Register an inert placeholder for a node whose dependency is missing
    pub fn add_dummy(
        &mut self,
        idname: &'static str,
        label: &'static str,
        dependency: &'static str,
    ) -> Result<(), RegistryError> {
        warn!(idname, dependency, "dependency missing, registering placeholder node");
        self.register_class(NodeClass {
            idname,
            label,
            kind: NodeClassKind::Dummy { dependency },
        })
    }

    /// Remove a class
    pub fn unregister_class(&mut self, idname: &str) -> Result<NodeClass, RegistryError> {
        debug!(idname, "unregistering node class");
        self.classes
            .remove(idname)
            .ok_or_else(|| RegistryError::NotRegistered(idname.to_string()))
    }

    /// Look up a class
    pub fn get(&self, idname: &str) -> Option<&NodeClass> {
        self.classes.get(idname)
    }

    /// Whether a class is registered
    pub fn contains(&self, idname: &str) -> bool {
        self.classes.contains_key(idname)
    }

    /// Registered classes in identifier order
    pub fn classes(&self) -> impl Iterator<Item = &NodeClass> {
        self.classes.values()
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Instantiate a node and let it declare its sockets and properties
    pub fn create(&self, idname: &str) -> Result<(Box<dyn Node>, NodeState), RegistryError> {
        let class = self
            .get(idname)
            .ok_or_else(|| RegistryError::NotRegistered(idname.to_string()))?;
        let mut node: Box<dyn Node> = match class.kind {
            NodeClassKind::Real(make) => make(),
            NodeClassKind::Dummy { dependency } => Box::new(DummyNode { dependency }),
        };
        let mut state = NodeState::new();
        node.init(&mut state);
        Ok((node, state))
    }
}

/// Placeholder node with no sockets that never computes anything
#[derive(Debug, Clone, Copy)]
pub struct DummyNode {
    dependency: &'static str,
}

impl DummyNode {
    /// Name of the dependency whose absence this node stands for
    pub fn dependency(&self) -> &'static str {
        self.dependency
    }
}

impl Node for DummyNode {
    fn init(&mut self, _state: &mut NodeState) {}

    fn process(&mut self, _state: &mut NodeState) -> Result<(), NodeError> {
        Ok(())
    }
}
