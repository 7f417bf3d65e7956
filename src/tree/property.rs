//! Node properties

use serde::{Deserialize, Serialize};

/// Float property of a node
///
/// Properties are the node's user-editable configuration. Changing a value
/// is what triggers re-evaluation of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    label: String,
    default: f32,
    value: f32,
}

impl Property {
    /// Create a property holding its default
    pub fn new(label: &str, default: f32) -> Self {
        Property {
            label: label.to_string(),
            default,
            value: default,
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Default value
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value; returns whether it changed
    pub fn set(&mut self, value: f32) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Restore the default; returns whether it changed
    pub fn reset(&mut self) -> bool {
        self.set(self.default)
    }
}
