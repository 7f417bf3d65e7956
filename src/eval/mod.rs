//! SDF Evaluation
//!
//! Functions for evaluating SDF trees at points.

pub mod parallel;

pub use parallel::{eval_batch, eval_batch_parallel, eval_grid};

use crate::modifiers::{modifier_extrude, modifier_extrude_point};
use crate::primitives::{sdf_box3d, sdf_cylinder, sdf_sphere, sdf_torus};
use crate::sdf2d::eval_2d;
use crate::types::SdfNode;
use glam::Vec3;

/// Evaluate an SDF tree at a single point
///
/// Recursively traverses the tree and computes the signed distance.
///
/// # Arguments
/// * `node` - The SDF tree root
/// * `point` - Point to evaluate
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval(node: &SdfNode, point: Vec3) -> f32 {
    match node {
        // === Primitives ===
        SdfNode::Sphere { radius } => sdf_sphere(point, *radius),
        SdfNode::Box3d { half_extents } => sdf_box3d(point, *half_extents),
        SdfNode::Cylinder {
            radius,
            half_height,
        } => sdf_cylinder(point, *radius, *half_height),
        SdfNode::Torus {
            major_radius,
            minor_radius,
        } => sdf_torus(point, *major_radius, *minor_radius),

        // === Transforms ===
        SdfNode::Translate { child, offset } => eval(child, point - *offset),
        SdfNode::Scale { child, factor } => eval(child, point / *factor) * factor,

        // === Modifiers ===
        SdfNode::Extrude {
            profile,
            half_height,
        } => {
            let d = eval_2d(profile, modifier_extrude_point(point));
            modifier_extrude(d, point.z, *half_height)
        }
    }
}
