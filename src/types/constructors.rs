//! Constructors for SdfNode

use glam::Vec3;
use std::sync::Arc;

use super::SdfNode;
use crate::sdf2d::Sdf2dNode;

impl SdfNode {
    // === Primitive constructors ===

    /// Create a sphere with the given radius
    #[must_use]
    #[inline]
    pub fn sphere(radius: f32) -> Self {
        SdfNode::Sphere { radius }
    }

    /// Create an axis-aligned box with the given dimensions
    #[must_use]
    #[inline]
    pub fn box3d(width: f32, height: f32, depth: f32) -> Self {
        SdfNode::Box3d {
            half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5),
        }
    }

    /// Create a cylinder along Y-axis
    #[must_use]
    #[inline]
    pub fn cylinder(radius: f32, height: f32) -> Self {
        SdfNode::Cylinder {
            radius,
            half_height: height * 0.5,
        }
    }

    /// Create a torus in the XZ plane
    #[must_use]
    #[inline]
    pub fn torus(major_radius: f32, minor_radius: f32) -> Self {
        SdfNode::Torus {
            major_radius,
            minor_radius,
        }
    }

    // === Transforms ===

    /// Translate by (x, y, z)
    #[must_use]
    #[inline]
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        SdfNode::Translate {
            child: Arc::new(self),
            offset: Vec3::new(x, y, z),
        }
    }

    /// Uniform scale
    #[must_use]
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        SdfNode::Scale {
            child: Arc::new(self),
            factor,
        }
    }

    // === Modifiers ===

    /// Extrude a 2D profile along the Z axis by the full `height`
    ///
    /// The resulting solid spans `-height / 2 ..= height / 2`.
    #[must_use]
    #[inline]
    pub fn extrude(profile: impl Into<Arc<Sdf2dNode>>, height: f32) -> Self {
        SdfNode::Extrude {
            profile: profile.into(),
            half_height: height * 0.5,
        }
    }
}
