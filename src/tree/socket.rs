//! Node sockets

use serde::{Deserialize, Serialize};

use crate::data::Data;

/// Kind of data a socket is meant to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocketKind {
    /// Scalar fields
    ScalarField,
    /// Numbers and other plain values
    Strings,
}

/// An input or output connection point of a node
#[derive(Debug, Clone)]
pub struct Socket {
    name: String,
    kind: SocketKind,
    prop_name: Option<String>,
    pub(crate) value: Option<Data>,
    pub(crate) linked: bool,
    /// Value fed from outside the tree; survives re-evaluation
    pub(crate) fed: Option<Data>,
}

impl Socket {
    pub(crate) fn new(kind: SocketKind, name: &str) -> Self {
        Socket {
            name: name.to_string(),
            kind,
            prop_name: None,
            value: None,
            linked: false,
            fed: None,
        }
    }

    /// Socket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Socket kind
    pub fn kind(&self) -> SocketKind {
        self.kind
    }

    /// Node property providing the value while the socket is unlinked
    pub fn prop_name(&self) -> Option<&str> {
        self.prop_name.as_deref()
    }

    /// Bind the socket to a node property
    pub fn set_prop_name(&mut self, prop_name: &str) -> &mut Self {
        self.prop_name = Some(prop_name.to_string());
        self
    }

    /// Whether anything is connected to this socket
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Current value, if one has been written this pass
    pub fn value(&self) -> Option<&Data> {
        self.value.as_ref()
    }

    /// Drop the value of the previous pass, keeping fed values
    pub(crate) fn reset(&mut self) {
        self.value = self.fed.clone();
    }
}
