//! Error types for socket data, nodes, the registry and node trees

use thiserror::Error;

/// Errors raised while reshaping or reading nested socket data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// An item was not of the expected kind
    #[error("expected {expected}, found {found}")]
    Type {
        /// Expected kind
        expected: &'static str,
        /// Actual kind
        found: &'static str,
    },

    /// Data is nested deeper than the requested level
    #[error("data nesting level {level} is deeper than {target}")]
    NestingTooDeep {
        /// Actual nesting level
        level: usize,
        /// Requested nesting level
        target: usize,
    },
}

/// Errors raised by a node while it processes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeError {
    /// Input socket has no data (unlinked without a property, or link not yet evaluated)
    #[error("no data on input socket '{0}'")]
    NoData(String),

    /// Socket name not declared by the node
    #[error("unknown socket '{0}'")]
    UnknownSocket(String),

    /// Property name not declared by the node
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// Data reshaping or access failed
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Errors raised by the node class registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A class with this identifier is already registered
    #[error("node class '{0}' is already registered")]
    AlreadyRegistered(String),

    /// No class with this identifier is registered
    #[error("node class '{0}' is not registered")]
    NotRegistered(String),
}

/// Errors raised while building or evaluating a node tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Node id does not exist in the tree
    #[error("unknown node id {0}")]
    UnknownNode(usize),

    /// Links form a cycle
    #[error("node tree contains a cycle")]
    Cycle,

    /// Registry lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Socket or property access failed
    #[error(transparent)]
    Node(#[from] NodeError),
}
