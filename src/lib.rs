//! # sdf-nodes
//!
//! Node-based construction of signed distance fields.
//!
//! Fields travel between nodes as shared, immutable [`field::FieldRef`]
//! handles inside nested [`data::Data`] lists. The [`nodes::SdfExtrudeNode`]
//! turns 2D profiles into 3D solids by sweeping them along Z.
//!
//! ## Features
//!
//! - **Runtime**: node registry, sockets, properties, dependency-ordered
//!   tree evaluation
//! - **SDF backend** (`sdf`, default): 2D and 3D SDF trees, extrusion,
//!   batch and grid evaluation
//! - **File I/O**: SDF trees (`.sdf.json`) and node-tree layouts
//!   (`.nodes.json`)
//! - **CLI** (`cli`): `sdf-nodes` binary
//!
//! ## Example
//!
//! ```rust
//! use sdf_nodes::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = default_registry().unwrap();
//! let mut tree = NodeTree::new();
//! let extrude = tree.add_node(&registry, SDF_EXTRUDE_IDNAME).unwrap();
//!
//! let circle: FieldRef = Arc::new(Sdf2dScalarField::new(Sdf2dNode::circle(1.0)));
//! tree.feed(extrude, "SDF", Data::List(vec![Data::Field(circle)])).unwrap();
//! tree.watch(extrude, "SDF").unwrap();
//! tree.set_property(extrude, "height", 2.0).unwrap();
//!
//! let out = tree.output(extrude, "SDF").unwrap().unwrap();
//! let solid = out.as_list().unwrap()[0].as_field().unwrap();
//! assert!(solid.evaluate(Vec3::ZERO) < 0.0);
//! ```

#![warn(missing_docs)]

pub mod data;
pub mod dependencies;
pub mod error;
pub mod field;
pub mod io;
pub mod nodes;
pub mod tree;

#[cfg(feature = "sdf")]
pub mod eval;
#[cfg(feature = "sdf")]
pub mod modifiers;
#[cfg(feature = "sdf")]
pub mod primitives;
#[cfg(feature = "sdf")]
pub mod sdf2d;
#[cfg(feature = "sdf")]
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::data::{zip_long_repeat, Data};
    pub use crate::dependencies::Dependencies;
    pub use crate::error::{DataError, NodeError, RegistryError, TreeError};
    pub use crate::field::{ConstantField, FieldRef, FnField, ScalarField};
    pub use crate::io::IoError;
    pub use crate::nodes::{default_registry, SDF_EXTRUDE_IDNAME, SDF_EXTRUDE_LABEL};
    pub use crate::tree::{Node, NodeId, NodeRegistry, NodeState, NodeTree, NodeType};
    pub use glam::Vec3;

    #[cfg(feature = "sdf")]
    pub use crate::eval::{eval, eval_batch, eval_batch_parallel, eval_grid};
    #[cfg(feature = "sdf")]
    pub use crate::field::{
        scalar_field_to_sdf_2d, Sdf2d, Sdf2dScalarField, Sdf3d, SdfScalarField,
    };
    #[cfg(feature = "sdf")]
    pub use crate::io::{get_info, load, save};
    #[cfg(feature = "sdf")]
    pub use crate::nodes::SdfExtrudeNode;
    #[cfg(feature = "sdf")]
    pub use crate::sdf2d::{eval_2d, Sdf2dNode};
    #[cfg(feature = "sdf")]
    pub use crate::types::{SdfMetadata, SdfNode, SdfTree};
    #[cfg(feature = "sdf")]
    pub use glam::Vec2;
}

// Re-exports for convenience
pub use data::Data;
pub use tree::NodeTree;

#[cfg(feature = "sdf")]
pub use eval::eval;
#[cfg(feature = "sdf")]
pub use io::{load, save};
#[cfg(feature = "sdf")]
pub use types::{SdfNode, SdfTree};
