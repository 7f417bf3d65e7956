//! Per-node sockets and properties

use std::collections::BTreeMap;

use super::property::Property;
use super::socket::{Socket, SocketKind};
use crate::data::Data;
use crate::error::NodeError;

/// Sockets and properties of one node instance
///
/// Node types declare their layout into a `NodeState` in
/// [`Node::init`](super::Node::init) and read and write socket values
/// through it in [`Node::process`](super::Node::process).
#[derive(Debug, Clone, Default)]
pub struct NodeState {
    inputs: Vec<Socket>,
    outputs: Vec<Socket>,
    properties: BTreeMap<String, Property>,
}

impl NodeState {
    /// Empty state with no sockets or properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input socket
    pub fn new_input(&mut self, kind: SocketKind, name: &str) -> &mut Socket {
        self.inputs.push(Socket::new(kind, name));
        let last = self.inputs.len() - 1;
        &mut self.inputs[last]
    }

    /// Declare an output socket
    pub fn new_output(&mut self, kind: SocketKind, name: &str) -> &mut Socket {
        self.outputs.push(Socket::new(kind, name));
        let last = self.outputs.len() - 1;
        &mut self.outputs[last]
    }

    /// Declare a float property
    pub fn add_property(&mut self, key: &str, property: Property) {
        self.properties.insert(key.to_string(), property);
    }

    /// Input sockets in declaration order
    pub fn inputs(&self) -> &[Socket] {
        &self.inputs
    }

    /// Output sockets in declaration order
    pub fn outputs(&self) -> &[Socket] {
        &self.outputs
    }

    /// Declared properties
    pub fn properties(&self) -> &BTreeMap<String, Property> {
        &self.properties
    }

    /// Input socket by name
    pub fn input(&self, name: &str) -> Result<&Socket, NodeError> {
        self.inputs
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| NodeError::UnknownSocket(name.to_string()))
    }

    /// Output socket by name
    pub fn output(&self, name: &str) -> Result<&Socket, NodeError> {
        self.outputs
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| NodeError::UnknownSocket(name.to_string()))
    }

    pub(crate) fn input_mut(&mut self, name: &str) -> Result<&mut Socket, NodeError> {
        self.inputs
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| NodeError::UnknownSocket(name.to_string()))
    }

    pub(crate) fn output_mut(&mut self, name: &str) -> Result<&mut Socket, NodeError> {
        self.outputs
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| NodeError::UnknownSocket(name.to_string()))
    }

    /// Whether any output has a consumer
    pub fn any_output_linked(&self) -> bool {
        self.outputs.iter().any(Socket::is_linked)
    }

    /// Read an input socket
    ///
    /// A linked socket yields the value delivered over the link. An unlinked
    /// socket bound to a property yields `[[value]]`. Anything else has no
    /// data.
    pub fn get(&self, name: &str) -> Result<Data, NodeError> {
        let socket = self.input(name)?;
        if socket.is_linked() {
            return socket
                .value()
                .cloned()
                .ok_or_else(|| NodeError::NoData(name.to_string()));
        }
        match socket.prop_name() {
            Some(key) => {
                let value = self.property(key)?;
                Ok(Data::List(vec![Data::List(vec![Data::Number(value)])]))
            }
            None => Err(NodeError::NoData(name.to_string())),
        }
    }

    /// Write an output socket
    pub fn set(&mut self, name: &str, data: Data) -> Result<(), NodeError> {
        self.output_mut(name)?.value = Some(data);
        Ok(())
    }

    /// Current value of a property
    pub fn property(&self, key: &str) -> Result<f32, NodeError> {
        self.properties
            .get(key)
            .map(Property::value)
            .ok_or_else(|| NodeError::UnknownProperty(key.to_string()))
    }

    /// Set a property; returns whether the value changed
    pub fn set_property(&mut self, key: &str, value: f32) -> Result<bool, NodeError> {
        self.properties
            .get_mut(key)
            .map(|p| p.set(value))
            .ok_or_else(|| NodeError::UnknownProperty(key.to_string()))
    }

    /// Mark an output as consumed without going through a tree
    pub fn link_output(&mut self, name: &str) -> Result<(), NodeError> {
        self.output_mut(name)?.linked = true;
        Ok(())
    }

    /// Deliver a value to an input as if it arrived over a link
    pub fn feed_input(&mut self, name: &str, data: Data) -> Result<(), NodeError> {
        let socket = self.input_mut(name)?;
        socket.linked = true;
        socket.fed = Some(data.clone());
        socket.value = Some(data);
        Ok(())
    }

    /// Drop all socket values of the previous pass
    pub(crate) fn reset_values(&mut self) {
        self.inputs.iter_mut().for_each(Socket::reset);
        self.outputs.iter_mut().for_each(Socket::reset);
    }
}
