//! Integration tests: SDF Extrude node inside a node tree
//!
//! Covers pairing of fields with heights, output nesting, profile coercion
//! and re-evaluation on property change.

#![cfg(feature = "sdf")]

mod common;

use common::*;
use sdf_nodes::prelude::*;
use std::sync::Arc;

/// Distance one unit above the top cap on the Z axis, for a profile whose
/// interior covers the origin
fn above_cap(field: &FieldRef, height: f32) -> f32 {
    field.evaluate(Vec3::new(0.0, 0.0, height * 0.5 + 1.0))
}

fn cap(field: &FieldRef, height: f32) -> f32 {
    field.evaluate(Vec3::new(0.0, 0.0, height * 0.5))
}

// ============================================================================
// Early exit
// ============================================================================

#[test]
fn unwatched_output_stays_empty() {
    let registry = default_registry().unwrap();
    let mut tree = NodeTree::new();
    let id = tree.add_node(&registry, SDF_EXTRUDE_IDNAME).unwrap();
    tree.feed(id, "SDF", fields(vec![circle(1.0)])).unwrap();

    tree.update().unwrap();

    assert_eq!(tree.output(id, "SDF").unwrap(), None);
    assert!(tree.node_error(id).is_none());
}

#[test]
fn unwatched_output_ignores_bad_input() {
    let registry = default_registry().unwrap();
    let mut tree = NodeTree::new();
    let id = tree.add_node(&registry, SDF_EXTRUDE_IDNAME).unwrap();
    tree.feed(id, "SDF", Data::Number(3.0)).unwrap();

    tree.update().unwrap();
    assert!(tree.node_error(id).is_none());
}

// ============================================================================
// Output shape
// ============================================================================

#[test]
fn flat_input_gives_flat_output() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(1.0)])).unwrap();
    tree.set_property(id, "height", 2.0).unwrap();

    let out = output(&tree, id);
    let items = out.as_list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(out.nesting_level(), 1);

    let solid = field_at(&out, 0);
    assert_close(cap(&solid, 2.0), 0.0, 1e-5, "top cap at z = 1");
    assert_close(
        solid.evaluate(Vec3::new(0.0, 0.0, -1.0)),
        0.0,
        1e-5,
        "bottom cap at z = -1",
    );
    assert_close(solid.evaluate(Vec3::ZERO), -1.0, 1e-5, "center");
}

#[test]
fn nested_input_keeps_grouping() {
    let (mut tree, id) = extrude_tree();
    let input = Data::List(vec![
        fields(vec![circle(1.0), circle(2.0)]),
        fields(vec![square(1.0)]),
    ]);
    tree.feed(id, "SDF", input).unwrap();
    tree.update().unwrap();

    let out = output(&tree, id);
    let groups = out.as_list().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].as_list().unwrap().len(), 2);
    assert_eq!(groups[1].as_list().unwrap().len(), 1);
    assert_eq!(out.nesting_level(), 2);
}

#[test]
fn empty_field_list_gives_empty_output() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", Data::List(Vec::new())).unwrap();
    tree.update().unwrap();

    assert!(tree.node_error(id).is_none());
    assert_eq!(tree.output(id, "SDF").unwrap(), Some(&Data::List(vec![])));
}

#[test]
fn empty_height_group_gives_empty_group() {
    let (mut tree, id) = extrude_tree();
    let input = Data::List(vec![fields(vec![circle(1.0), circle(2.0)])]);
    tree.feed(id, "SDF", input).unwrap();
    tree.feed(id, "Height", Data::List(vec![Data::List(vec![])]))
        .unwrap();
    tree.update().unwrap();

    assert!(tree.node_error(id).is_none());
    assert_eq!(
        tree.output(id, "SDF").unwrap(),
        Some(&Data::List(vec![Data::List(vec![])]))
    );
}

#[test]
fn too_deep_field_input_is_reported() {
    let (mut tree, id) = extrude_tree();
    let input = Data::List(vec![Data::List(vec![fields(vec![circle(1.0)])])]);
    tree.feed(id, "SDF", input).unwrap();
    tree.update().unwrap();

    assert!(matches!(
        tree.node_error(id),
        Some(NodeError::Data(DataError::NestingTooDeep { level: 3, target: 2 }))
    ));
}

// ============================================================================
// Pairing with heights
// ============================================================================

#[test]
fn single_height_repeats_for_every_field() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(1.0), circle(2.0), circle(3.0)]))
        .unwrap();
    tree.set_property(id, "height", 4.0).unwrap();

    let out = output(&tree, id);
    assert_eq!(out.as_list().unwrap().len(), 3);
    for i in 0..3 {
        let solid = field_at(&out, i);
        assert_close(cap(&solid, 4.0), 0.0, 1e-5, "cap at z = 2");
        assert_close(above_cap(&solid, 4.0), 1.0, 1e-5, "one above cap");
    }
}

#[test]
fn heights_pair_element_wise() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(5.0), circle(5.0)]))
        .unwrap();
    tree.feed(id, "Height", numbers(&[1.0, 3.0])).unwrap();
    tree.update().unwrap();

    let out = output(&tree, id);
    assert_close(cap(&field_at(&out, 0), 1.0), 0.0, 1e-5, "first cap");
    assert_close(cap(&field_at(&out, 1), 3.0), 0.0, 1e-5, "second cap");
    assert_close(above_cap(&field_at(&out, 1), 3.0), 1.0, 1e-5, "second above");
}

#[test]
fn last_height_group_repeats() {
    let (mut tree, id) = extrude_tree();
    let input = Data::List(vec![
        fields(vec![circle(5.0)]),
        fields(vec![circle(5.0)]),
        fields(vec![circle(5.0)]),
    ]);
    tree.feed(id, "SDF", input).unwrap();
    let heights = Data::List(vec![numbers(&[1.0]), numbers(&[6.0])]);
    tree.feed(id, "Height", heights).unwrap();
    tree.update().unwrap();

    let out = output(&tree, id);
    let groups = out.as_list().unwrap();
    assert_eq!(groups.len(), 3);
    let expected = [1.0, 6.0, 6.0];
    for (group, height) in groups.iter().zip(expected) {
        let solid = field_at(group, 0);
        assert_close(cap(&solid, height), 0.0, 1e-5, "cap");
    }
}

#[test]
fn flat_fields_with_height_groups_concatenate() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(5.0)])).unwrap();
    let heights = Data::List(vec![numbers(&[1.0]), numbers(&[2.0])]);
    tree.feed(id, "Height", heights).unwrap();
    tree.update().unwrap();

    // One group per height group, flattened into a single list
    let out = output(&tree, id);
    assert_eq!(out.nesting_level(), 1);
    assert_eq!(out.as_list().unwrap().len(), 2);
    assert_close(cap(&field_at(&out, 0), 1.0), 0.0, 1e-5, "first cap");
    assert_close(cap(&field_at(&out, 1), 2.0), 0.0, 1e-5, "second cap");
    assert_close(above_cap(&field_at(&out, 1), 2.0), 1.0, 1e-5, "second above");
}

#[test]
fn extra_heights_extend_the_output() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(5.0)])).unwrap();
    tree.feed(id, "Height", numbers(&[1.0, 2.0, 3.0])).unwrap();
    tree.update().unwrap();

    // The single field repeats for every height
    let out = output(&tree, id);
    assert_eq!(out.as_list().unwrap().len(), 3);
    assert_close(cap(&field_at(&out, 2), 3.0), 0.0, 1e-5, "third cap");
}

// ============================================================================
// Profile coercion
// ============================================================================

#[test]
fn solid_input_is_sliced_at_z_zero() {
    let (mut tree, id) = extrude_tree();
    let sphere: FieldRef = Arc::new(SdfScalarField::new(SdfNode::sphere(1.0)));
    tree.feed(id, "SDF", fields(vec![sphere])).unwrap();
    tree.set_property(id, "height", 2.0).unwrap();

    // Sphere sliced at its equator and swept along Z is a cylinder
    let solid = field_at(&output(&tree, id), 0);
    assert_close(solid.evaluate(Vec3::new(1.0, 0.0, 0.9)), 0.0, 1e-5, "side wall");
    assert_close(solid.evaluate(Vec3::new(0.0, 0.0, 1.0)), 0.0, 1e-5, "cap");
    assert_close(solid.evaluate(Vec3::new(0.5, 0.0, 0.9)), -0.1, 1e-5, "inside");
    assert!(solid.as_sdf().is_some());
}

#[test]
fn generic_field_is_used_as_profile() {
    let (mut tree, id) = extrude_tree();
    let disc: FieldRef = Arc::new(FnField::new("disc", |p: Vec3| p.truncate().length() - 1.0));
    tree.feed(id, "SDF", fields(vec![disc])).unwrap();
    tree.update().unwrap();

    let solid = field_at(&output(&tree, id), 0);
    let reference = SdfScalarField::new(SdfNode::extrude(Sdf2dNode::circle(1.0), 1.0));
    for p in [
        Vec3::ZERO,
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(0.3, 0.4, 0.7),
        Vec3::new(-1.5, 0.5, -2.0),
    ] {
        assert_close(solid.evaluate(p), reference.evaluate(p), 1e-5, "generic profile");
    }
    // Only exists in memory
    assert!(solid.as_sdf().is_none());
}

#[test]
fn number_in_field_socket_is_reported() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", numbers(&[1.0])).unwrap();
    tree.update().unwrap();
    assert!(matches!(
        tree.node_error(id),
        Some(NodeError::Data(DataError::Type { .. }))
    ));
}

// ============================================================================
// Re-evaluation
// ============================================================================

#[test]
fn height_change_reevaluates_tree() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(5.0)])).unwrap();
    tree.update().unwrap();
    assert_close(cap(&field_at(&output(&tree, id), 0), 1.0), 0.0, 1e-5, "default height");

    assert_eq!(tree.set_property(id, "height", 8.0), Ok(true));
    let solid = field_at(&output(&tree, id), 0);
    assert_close(cap(&solid, 8.0), 0.0, 1e-5, "new cap");

    // Same value again does nothing
    assert_eq!(tree.set_property(id, "height", 8.0), Ok(false));
}

#[test]
fn linked_height_overrides_property() {
    let (mut tree, id) = extrude_tree();
    tree.set_property(id, "height", 10.0).unwrap();
    tree.feed(id, "SDF", fields(vec![circle(5.0)])).unwrap();
    tree.feed(id, "Height", numbers(&[2.0])).unwrap();
    tree.update().unwrap();

    let solid = field_at(&output(&tree, id), 0);
    assert_close(cap(&solid, 2.0), 0.0, 1e-5, "fed height wins");
}

#[test]
fn missing_field_input_is_reported() {
    let (mut tree, id) = extrude_tree();
    tree.update().unwrap();
    assert_eq!(tree.node_error(id), Some(&NodeError::NoData("SDF".to_string())));
}
