//! Primitive 3D SDF shapes
//!
//! Closed-form distance functions for the solids an [`SdfNode`](crate::types::SdfNode)
//! tree can hold. All shapes are centered at the origin.

use glam::{Vec2, Vec3};

/// Signed distance to a sphere centered at origin
#[inline(always)]
pub fn sdf_sphere(point: Vec3, radius: f32) -> f32 {
    point.length() - radius
}

/// Signed distance to an axis-aligned box centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `half_extents` - Half-size along each axis
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_box3d(point: Vec3, half_extents: Vec3) -> f32 {
    let q = point.abs() - half_extents;
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Signed distance to a cylinder along the Y axis
#[inline(always)]
pub fn sdf_cylinder(point: Vec3, radius: f32, half_height: f32) -> f32 {
    let d = Vec2::new(
        Vec2::new(point.x, point.z).length() - radius,
        point.y.abs() - half_height,
    );
    d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
}

/// Signed distance to a torus lying in the XZ plane
#[inline(always)]
pub fn sdf_torus(point: Vec3, major_radius: f32, minor_radius: f32) -> f32 {
    let q = Vec2::new(Vec2::new(point.x, point.z).length() - major_radius, point.y);
    q.length() - minor_radius
}
