//! Extrude modifier
//!
//! Sweeps a 2D cross-section in the XY plane along the Z axis. The solid is
//! centered on `z = 0` and spans `half_height` to either side.

use glam::{Vec2, Vec3};

/// Combine a cross-section distance with the Z caps of an extrusion
///
/// # Arguments
/// * `profile_distance` - Distance of the 2D profile at `(p.x, p.y)`
/// * `p_z` - Z coordinate of the evaluation point
/// * `half_height` - Half the extrusion depth
///
/// # Returns
/// Signed distance to the extruded solid
#[inline(always)]
pub fn modifier_extrude(profile_distance: f32, p_z: f32, half_height: f32) -> f32 {
    let w = Vec2::new(profile_distance, p_z.abs() - half_height);
    w.x.max(w.y).min(0.0) + w.max(Vec2::ZERO).length()
}

/// Project a point onto the profile plane
#[inline(always)]
pub fn modifier_extrude_point(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}
