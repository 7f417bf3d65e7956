//! Integration tests: I/O round-trip consistency
//!
//! Verifies that extruded fields written as SDF JSON evaluate identically
//! after loading, and that node-tree layouts restore a working tree.

#![cfg(feature = "sdf")]

mod common;

use common::*;
use sdf_nodes::io::{
    from_layout_string, load_layout_json, save_field, save_layout_json, to_layout_string,
};
use sdf_nodes::nodes;
use sdf_nodes::prelude::*;
use std::path::PathBuf;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("sdf_nodes_test_io");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn sample_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.5),
        Vec3::new(0.3, -0.2, 0.9),
        Vec3::new(2.0, 2.0, 2.0),
        Vec3::new(-0.5, 0.5, -1.5),
    ]
}

// ============================================================================
// SDF JSON
// ============================================================================

#[test]
fn extruded_field_round_trip() {
    let (mut tree, id) = extrude_tree();
    tree.feed(id, "SDF", fields(vec![circle(1.0)])).unwrap();
    tree.set_property(id, "height", 1.5).unwrap();
    let solid = field_at(&output(&tree, id), 0);

    let path = temp_dir().join("extruded.sdf.json");
    let sdf = SdfScalarField::new(solid.as_sdf().unwrap().clone());
    save_field(&sdf, SDF_EXTRUDE_IDNAME, &path).expect("save_field failed");
    let loaded = load(&path).expect("load failed");

    for p in sample_points() {
        assert_close(
            solid.evaluate(p),
            eval(&loaded.root, p),
            1e-6,
            &format!("JSON mismatch at {:?}", p),
        );
    }
    std::fs::remove_file(&path).ok();
}

#[test]
fn info_reports_source_node() {
    let path = temp_dir().join("info.sdf.json");
    let sdf = SdfScalarField::new(SdfNode::extrude(Sdf2dNode::circle(1.0), 2.0));
    save_field(&sdf, SDF_EXTRUDE_IDNAME, &path).unwrap();

    let info = get_info(&path).unwrap();
    assert!(info.contains("Node count: 2"));
    assert!(info.contains("Modifier"));
    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_dir().join("does_not_exist.sdf.json");
    assert!(matches!(load(&path), Err(IoError::Io(_))));
}

// ============================================================================
// Node-tree layout
// ============================================================================

#[test]
fn layout_round_trip_restores_height() {
    let (mut tree, id) = extrude_tree();
    tree.set_property(id, "height", 6.0).unwrap();

    let path = temp_dir().join("tree.nodes.json");
    save_layout_json(&tree, &path).unwrap();

    let registry = default_registry().unwrap();
    let mut restored = load_layout_json(&registry, &path).unwrap();
    assert_eq!(restored.state(id).unwrap().property("height"), Ok(6.0));

    // Socket values are not saved; feed again and evaluate
    restored.feed(id, "SDF", fields(vec![circle(5.0)])).unwrap();
    restored.update().unwrap();
    let solid = field_at(&output(&restored, id), 0);
    assert_close(solid.evaluate(Vec3::new(0.0, 0.0, 3.0)), 0.0, 1e-5, "cap at z = 3");
    std::fs::remove_file(&path).ok();
}

#[test]
fn layout_with_bad_link_is_rejected() {
    let json = format!(
        r#"{{
            "version": "0.1.0",
            "nodes": [ {{ "idname": "{0}" }}, {{ "idname": "{0}" }} ],
            "links": [
                {{ "from_node": 0, "from_socket": "Nope", "to_node": 1, "to_socket": "SDF" }}
            ]
        }}"#,
        SDF_EXTRUDE_IDNAME
    );
    let registry = default_registry().unwrap();
    assert!(matches!(
        from_layout_string(&registry, &json),
        Err(IoError::Tree(TreeError::Node(NodeError::UnknownSocket(_))))
    ));
}

#[test]
fn chained_extrusions_survive_layout() {
    let registry = default_registry().unwrap();
    let mut tree = NodeTree::new();
    let first = tree.add_node(&registry, SDF_EXTRUDE_IDNAME).unwrap();
    let second = tree.add_node(&registry, SDF_EXTRUDE_IDNAME).unwrap();
    tree.link(first, "SDF", second, "SDF").unwrap();
    tree.watch(second, "SDF").unwrap();

    let json = to_layout_string(&tree).unwrap();
    let mut restored = from_layout_string(&registry, &json).unwrap();
    restored.feed(first, "SDF", fields(vec![circle(1.0)])).unwrap();
    restored.update().unwrap();

    // The first output is linked, so both nodes produce values
    assert!(restored.output(first, "SDF").unwrap().is_some());
    assert_eq!(output(&restored, second).as_list().unwrap().len(), 1);
}

#[test]
fn layout_loads_without_sdf_backend() {
    let (mut tree, id) = extrude_tree();
    let second = tree
        .add_node(&default_registry().unwrap(), SDF_EXTRUDE_IDNAME)
        .unwrap();
    tree.link(id, "SDF", second, "SDF").unwrap();
    tree.set_property(id, "height", 4.0).unwrap();
    let json = to_layout_string(&tree).unwrap();

    let mut placeholders = NodeRegistry::new();
    nodes::register(&mut placeholders, &Dependencies::none()).unwrap();
    let mut restored = from_layout_string(&placeholders, &json).expect("placeholder load");

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.idname(id), Ok(SDF_EXTRUDE_IDNAME));
    assert!(restored.links().is_empty());
    assert_eq!(restored.watched().count(), 0);
    restored.update().unwrap();
    assert!(restored.node_error(id).is_none());
}
