//! Common test helpers for sdf-nodes integration tests

#![allow(dead_code)]

use sdf_nodes::prelude::*;
use std::sync::Arc;

// ============================================================================
// Standard test fields
// ============================================================================

/// 2D circle profile at the origin
pub fn circle(radius: f32) -> FieldRef {
    Arc::new(Sdf2dScalarField::new(Sdf2dNode::circle(radius)))
}

/// 2D axis-aligned square profile with the given half size
pub fn square(half: f32) -> FieldRef {
    Arc::new(Sdf2dScalarField::new(Sdf2dNode::rect(half, half)))
}

/// Flat list of fields
pub fn fields(items: Vec<FieldRef>) -> Data {
    Data::List(items.into_iter().map(Data::Field).collect())
}

/// Flat list of numbers
pub fn numbers(items: &[f32]) -> Data {
    Data::List(items.iter().map(|&v| Data::Number(v)).collect())
}

// ============================================================================
// Node-tree helpers
// ============================================================================

/// Tree holding one extrude node whose output is watched
pub fn extrude_tree() -> (NodeTree, NodeId) {
    let registry = default_registry().expect("registry");
    let mut tree = NodeTree::new();
    let id = tree
        .add_node(&registry, SDF_EXTRUDE_IDNAME)
        .expect("extrude node");
    tree.watch(id, "SDF").expect("watch");
    (tree, id)
}

/// Output of the extrude node after the last pass
pub fn output(tree: &NodeTree, id: NodeId) -> Data {
    tree.output(id, "SDF")
        .expect("output socket")
        .cloned()
        .expect("output value")
}

/// Field at `index` of a flat list
pub fn field_at(data: &Data, index: usize) -> FieldRef {
    data.as_list().expect("list")[index]
        .as_field()
        .expect("field")
        .clone()
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}
