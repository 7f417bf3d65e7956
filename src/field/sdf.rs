//! SDF-backed scalar fields
//!
//! [`Sdf2d`] and [`Sdf3d`] are the distance handles the extrude node works
//! with. Each is either a serializable tree or, when built from an arbitrary
//! upstream field, a closure-like wrapper around that field.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use tracing::trace;

use super::{FieldRef, ScalarField};
use crate::eval::{eval, eval_batch_parallel};
use crate::modifiers::{modifier_extrude, modifier_extrude_point};
use crate::sdf2d::{eval_2d, Sdf2dNode};
use crate::types::{SdfNode, SdfTree};

/// A 2D signed distance function
#[derive(Debug, Clone)]
pub enum Sdf2d {
    /// Serializable 2D tree
    Node(Arc<Sdf2dNode>),
    /// Arbitrary field sampled on the plane `z = const`
    Plane {
        /// Sampled field
        field: FieldRef,
        /// Plane height
        z: f32,
    },
}

impl Sdf2d {
    /// Signed distance at a point of the plane
    #[inline]
    pub fn distance(&self, point: Vec2) -> f32 {
        match self {
            Sdf2d::Node(node) => eval_2d(node, point),
            Sdf2d::Plane { field, z } => field.evaluate(point.extend(*z)),
        }
    }

    /// Sweep this profile along Z by the full `height`
    ///
    /// Tree profiles stay serializable; plane-sampled profiles produce an
    /// in-memory extrusion.
    pub fn extrude(&self, height: f32) -> Sdf3d {
        match self {
            Sdf2d::Node(node) => Sdf3d::Node(Arc::new(SdfNode::extrude(Arc::clone(node), height))),
            Sdf2d::Plane { .. } => Sdf3d::Extrude {
                profile: self.clone(),
                half_height: height * 0.5,
            },
        }
    }
}

impl From<Sdf2dNode> for Sdf2d {
    fn from(node: Sdf2dNode) -> Self {
        Sdf2d::Node(Arc::new(node))
    }
}

/// A 3D signed distance function
#[derive(Debug, Clone)]
pub enum Sdf3d {
    /// Serializable 3D tree
    Node(Arc<SdfNode>),
    /// Extrusion of a plane-sampled profile
    Extrude {
        /// Cross-section
        profile: Sdf2d,
        /// Half the extrusion depth
        half_height: f32,
    },
}

impl Sdf3d {
    /// Signed distance at a point
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        match self {
            Sdf3d::Node(node) => eval(node, point),
            Sdf3d::Extrude {
                profile,
                half_height,
            } => {
                let d = profile.distance(modifier_extrude_point(point));
                modifier_extrude(d, point.z, *half_height)
            }
        }
    }

    /// The serializable tree, if this SDF has one
    pub fn as_node(&self) -> Option<&SdfNode> {
        match self {
            Sdf3d::Node(node) => Some(node.as_ref()),
            Sdf3d::Extrude { .. } => None,
        }
    }
}

impl From<SdfNode> for Sdf3d {
    fn from(node: SdfNode) -> Self {
        Sdf3d::Node(Arc::new(node))
    }
}

/// Scalar field whose value is the distance to a 3D SDF
#[derive(Debug, Clone)]
pub struct SdfScalarField {
    sdf: Sdf3d,
}

impl SdfScalarField {
    /// Wrap a 3D SDF
    pub fn new(sdf: impl Into<Sdf3d>) -> Self {
        SdfScalarField { sdf: sdf.into() }
    }

    /// The wrapped SDF
    pub fn sdf(&self) -> &Sdf3d {
        &self.sdf
    }

    /// Package the wrapped SDF for saving, if it is serializable
    pub fn to_tree(&self) -> Option<SdfTree> {
        self.sdf.as_node().map(|node| SdfTree::new(node.clone()))
    }
}

impl ScalarField for SdfScalarField {
    fn evaluate(&self, point: Vec3) -> f32 {
        self.sdf.distance(point)
    }

    fn evaluate_batch(&self, points: &[Vec3]) -> Vec<f32> {
        match &self.sdf {
            Sdf3d::Node(node) => eval_batch_parallel(node, points),
            Sdf3d::Extrude { .. } => points.iter().map(|&p| self.sdf.distance(p)).collect(),
        }
    }

    fn as_sdf(&self) -> Option<&SdfNode> {
        self.sdf.as_node()
    }
}

/// Scalar field whose value is the distance to a 2D SDF, constant along Z
#[derive(Debug, Clone)]
pub struct Sdf2dScalarField {
    sdf: Sdf2d,
}

impl Sdf2dScalarField {
    /// Wrap a 2D SDF
    pub fn new(sdf: impl Into<Sdf2d>) -> Self {
        Sdf2dScalarField { sdf: sdf.into() }
    }
}

impl ScalarField for Sdf2dScalarField {
    fn evaluate(&self, point: Vec3) -> f32 {
        self.sdf.distance(point.truncate())
    }

    fn as_sdf_2d(&self) -> Option<&Sdf2d> {
        Some(&self.sdf)
    }
}

/// Interpret any scalar field as a 2D SDF on the plane at height `z`
///
/// 2D SDF fields are used as-is, serializable 3D SDF fields are sliced, and
/// every other field is sampled directly on the plane.
pub fn scalar_field_to_sdf_2d(field: &FieldRef, z: f32) -> Sdf2d {
    if let Some(sdf) = field.as_sdf_2d() {
        trace!("profile taken from 2D SDF field");
        return sdf.clone();
    }
    if let Some(solid) = field.as_sdf() {
        trace!(z, "profile sliced from 3D SDF field");
        return Sdf2dNode::slice(solid.clone(), z).into();
    }
    trace!(z, "profile sampled from generic field");
    Sdf2d::Plane {
        field: Arc::clone(field),
        z,
    }
}
