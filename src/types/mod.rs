//! Core SDF types
//!
//! Defines the serializable 3D [`SdfNode`] tree and its container.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::sdf2d::Sdf2dNode;

mod constructors;
mod containers;

pub use containers::{SdfMetadata, SdfTree};

/// Category of an SDF node variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdfCategory {
    /// Leaf geometry nodes (spheres, boxes, cylinders, tori)
    Primitive,
    /// Spatial transform nodes (translate, scale)
    Transform,
    /// Nodes that build a solid from a different kind of child (extrude)
    Modifier,
}

/// Signed Distance Function Node
///
/// Represents a node in a 3D SDF tree. Each node can be:
/// - A primitive shape (sphere, box, etc.)
/// - A transform applied to a child node
/// - A modifier lifting a 2D profile into 3D
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SdfNode {
    // === Primitives ===
    /// Sphere with radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },

    /// Axis-aligned box with half-extents
    Box3d {
        /// Half-extents along each axis
        half_extents: Vec3,
    },

    /// Cylinder along Y-axis with radius and half-height
    Cylinder {
        /// Cylinder radius
        radius: f32,
        /// Half the cylinder height
        half_height: f32,
    },

    /// Torus in XZ plane with major and minor radius
    Torus {
        /// Distance from center to tube center
        major_radius: f32,
        /// Tube radius
        minor_radius: f32,
    },

    // === Transforms ===
    /// Translation
    Translate {
        /// Child node
        child: Arc<SdfNode>,
        /// Offset
        offset: Vec3,
    },

    /// Uniform scale
    Scale {
        /// Child node
        child: Arc<SdfNode>,
        /// Scale factor
        factor: f32,
    },

    // === Modifiers ===
    /// Extrude a 2D profile along the Z axis
    Extrude {
        /// Cross-section in the XY plane
        profile: Arc<Sdf2dNode>,
        /// Half the extrusion depth
        half_height: f32,
    },
}

impl SdfNode {
    /// Category of this node
    pub fn category(&self) -> SdfCategory {
        match self {
            Self::Sphere { .. } | Self::Box3d { .. } | Self::Cylinder { .. } | Self::Torus { .. } => {
                SdfCategory::Primitive
            }
            Self::Translate { .. } | Self::Scale { .. } => SdfCategory::Transform,
            Self::Extrude { .. } => SdfCategory::Modifier,
        }
    }

    /// Count nodes in the tree, including the nodes of extrusion profiles
    pub fn node_count(&self) -> u32 {
        match self {
            SdfNode::Sphere { .. }
            | SdfNode::Box3d { .. }
            | SdfNode::Cylinder { .. }
            | SdfNode::Torus { .. } => 1,
            SdfNode::Translate { child, .. } | SdfNode::Scale { child, .. } => {
                1 + child.node_count()
            }
            SdfNode::Extrude { profile, .. } => 1 + profile.node_count(),
        }
    }
}
