//! Pure 2D SDF evaluation module
//!
//! Provides a dedicated 2D SDF node type and evaluator for flat geometry:
//! extrusion profiles, planar sections of 3D solids, and the boolean and
//! transform nodes that combine them.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::eval::eval;
use crate::types::SdfNode;

// ── 2D Node Type ─────────────────────────────────────────────

/// A 2D Signed Distance Function node.
///
/// Represents flat geometry with pure 2D evaluation (no Z component).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Sdf2dNode {
    /// Circle centered at `center` with `radius`.
    Circle {
        /// Center position.
        center: Vec2,
        /// Circle radius.
        radius: f32,
    },

    /// Axis-aligned rectangle centered at `center`.
    Rect {
        /// Center position.
        center: Vec2,
        /// Half-extents (half-width, half-height).
        half_extents: Vec2,
    },

    /// Rounded rectangle.
    RoundedRect {
        /// Center position.
        center: Vec2,
        /// Half-extents (before rounding).
        half_extents: Vec2,
        /// Corner radius.
        corner_radius: f32,
    },

    /// Line segment with thickness.
    Line {
        /// First endpoint.
        a: Vec2,
        /// Second endpoint.
        b: Vec2,
        /// Half-thickness.
        thickness: f32,
    },

    /// Section of a 3D solid through the plane `z = const`.
    Slice {
        /// The sliced solid.
        solid: Arc<SdfNode>,
        /// Plane height.
        z: f32,
    },

    /// Boolean union of two 2D SDFs.
    Union(Box<Sdf2dNode>, Box<Sdf2dNode>),
    /// Boolean subtraction (a - b).
    Subtract(Box<Sdf2dNode>, Box<Sdf2dNode>),
    /// Boolean intersection.
    Intersect(Box<Sdf2dNode>, Box<Sdf2dNode>),
    /// Smooth union with blending radius k.
    SmoothUnion {
        /// First child.
        a: Box<Sdf2dNode>,
        /// Second child.
        b: Box<Sdf2dNode>,
        /// Blending radius.
        k: f32,
    },

    /// Translation.
    Translate {
        /// Child node.
        child: Box<Sdf2dNode>,
        /// Offset.
        offset: Vec2,
    },
    /// Rotation around origin.
    Rotate {
        /// Child node.
        child: Box<Sdf2dNode>,
        /// Angle in radians.
        angle: f32,
    },
    /// Uniform scale.
    Scale {
        /// Child node.
        child: Box<Sdf2dNode>,
        /// Scale factor.
        factor: f32,
    },
}

// ── Evaluation ───────────────────────────────────────────────

/// Evaluate a 2D SDF tree at a point.
///
/// Returns the signed distance: negative = inside, positive = outside.
#[inline]
pub fn eval_2d(node: &Sdf2dNode, point: Vec2) -> f32 {
    match node {
        Sdf2dNode::Circle { center, radius } => (point - *center).length() - radius,

        Sdf2dNode::Rect {
            center,
            half_extents,
        } => box_distance(point - *center, *half_extents),

        Sdf2dNode::RoundedRect {
            center,
            half_extents,
            corner_radius,
        } => {
            let inner = *half_extents - Vec2::splat(*corner_radius);
            box_distance(point - *center, inner) - corner_radius
        }

        Sdf2dNode::Line { a, b, thickness } => {
            let pa = point - *a;
            let ba = *b - *a;
            let ba_sq = ba.length_squared();
            let t = if ba_sq > 1e-10 {
                (pa.dot(ba) / ba_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            (pa - ba * t).length() - thickness
        }

        Sdf2dNode::Slice { solid, z } => eval(solid, Vec3::new(point.x, point.y, *z)),

        Sdf2dNode::Union(a, b) => eval_2d(a, point).min(eval_2d(b, point)),
        Sdf2dNode::Subtract(a, b) => eval_2d(a, point).max(-eval_2d(b, point)),
        Sdf2dNode::Intersect(a, b) => eval_2d(a, point).max(eval_2d(b, point)),
        Sdf2dNode::SmoothUnion { a, b, k } => {
            smooth_min_2d(eval_2d(a, point), eval_2d(b, point), *k)
        }

        Sdf2dNode::Translate { child, offset } => eval_2d(child, point - *offset),
        Sdf2dNode::Rotate { child, angle } => {
            let (s, c) = angle.sin_cos();
            let p = Vec2::new(point.x * c + point.y * s, -point.x * s + point.y * c);
            eval_2d(child, p)
        }
        Sdf2dNode::Scale { child, factor } => eval_2d(child, point / *factor) * factor,
    }
}

/// Evaluate a batch of points against a 2D SDF.
pub fn eval_2d_batch(node: &Sdf2dNode, points: &[Vec2]) -> Vec<f32> {
    points.iter().map(|&p| eval_2d(node, p)).collect()
}

// ── Helpers ──────────────────────────────────────────────────

#[inline(always)]
fn box_distance(p: Vec2, half_extents: Vec2) -> f32 {
    let d = p.abs() - half_extents;
    d.max(Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Smooth minimum (polynomial) for 2D SDF blending.
#[inline(always)]
fn smooth_min_2d(a: f32, b: f32, k: f32) -> f32 {
    if k < 1e-10 {
        return a.min(b);
    }
    let h = ((k - (a - b).abs()) / k).clamp(0.0, 1.0);
    a.min(b) - h * h * k * 0.25
}

// ── Constructors ─────────────────────────────────────────────

impl Sdf2dNode {
    /// Create a circle at the origin.
    pub fn circle(radius: f32) -> Self {
        Sdf2dNode::Circle {
            center: Vec2::ZERO,
            radius,
        }
    }

    /// Create a rectangle at the origin.
    pub fn rect(half_w: f32, half_h: f32) -> Self {
        Sdf2dNode::Rect {
            center: Vec2::ZERO,
            half_extents: Vec2::new(half_w, half_h),
        }
    }

    /// Create a rounded rectangle at the origin.
    pub fn rounded_rect(half_w: f32, half_h: f32, corner_radius: f32) -> Self {
        Sdf2dNode::RoundedRect {
            center: Vec2::ZERO,
            half_extents: Vec2::new(half_w, half_h),
            corner_radius,
        }
    }

    /// Create a line segment.
    pub fn line(a: Vec2, b: Vec2, thickness: f32) -> Self {
        Sdf2dNode::Line { a, b, thickness }
    }

    /// Section of a 3D solid at height `z`.
    pub fn slice(solid: impl Into<Arc<SdfNode>>, z: f32) -> Self {
        Sdf2dNode::Slice {
            solid: solid.into(),
            z,
        }
    }

    /// Boolean union with another 2D SDF.
    pub fn union(self, other: Sdf2dNode) -> Self {
        Sdf2dNode::Union(Box::new(self), Box::new(other))
    }

    /// Boolean subtraction.
    pub fn subtract(self, other: Sdf2dNode) -> Self {
        Sdf2dNode::Subtract(Box::new(self), Box::new(other))
    }

    /// Boolean intersection.
    pub fn intersect(self, other: Sdf2dNode) -> Self {
        Sdf2dNode::Intersect(Box::new(self), Box::new(other))
    }

    /// Smooth union.
    pub fn smooth_union(self, other: Sdf2dNode, k: f32) -> Self {
        Sdf2dNode::SmoothUnion {
            a: Box::new(self),
            b: Box::new(other),
            k,
        }
    }

    /// Translate.
    pub fn translate(self, x: f32, y: f32) -> Self {
        Sdf2dNode::Translate {
            child: Box::new(self),
            offset: Vec2::new(x, y),
        }
    }

    /// Rotate by angle (radians).
    pub fn rotate(self, angle: f32) -> Self {
        Sdf2dNode::Rotate {
            child: Box::new(self),
            angle,
        }
    }

    /// Uniform scale.
    pub fn scale(self, factor: f32) -> Self {
        Sdf2dNode::Scale {
            child: Box::new(self),
            factor,
        }
    }

    /// Number of nodes in this 2D tree. A slice counts its solid.
    pub fn node_count(&self) -> u32 {
        match self {
            Sdf2dNode::Circle { .. }
            | Sdf2dNode::Rect { .. }
            | Sdf2dNode::RoundedRect { .. }
            | Sdf2dNode::Line { .. } => 1,
            Sdf2dNode::Slice { solid, .. } => 1 + solid.node_count(),
            Sdf2dNode::Union(a, b) | Sdf2dNode::Subtract(a, b) | Sdf2dNode::Intersect(a, b) => {
                1 + a.node_count() + b.node_count()
            }
            Sdf2dNode::SmoothUnion { a, b, .. } => 1 + a.node_count() + b.node_count(),
            Sdf2dNode::Translate { child, .. }
            | Sdf2dNode::Rotate { child, .. }
            | Sdf2dNode::Scale { child, .. } => 1 + child.node_count(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_center_inside() {
        let c = Sdf2dNode::circle(1.0);
        assert!(eval_2d(&c, Vec2::ZERO) < 0.0);
    }

    #[test]
    fn circle_on_surface() {
        let c = Sdf2dNode::circle(1.0);
        assert!(eval_2d(&c, Vec2::new(1.0, 0.0)).abs() < 1e-5);
    }

    #[test]
    fn rect_outside() {
        let r = Sdf2dNode::rect(1.0, 0.5);
        let d = eval_2d(&r, Vec2::new(2.0, 0.0));
        assert!((d - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rounded_rect() {
        let rr = Sdf2dNode::rounded_rect(1.0, 0.5, 0.1);
        assert!(eval_2d(&rr, Vec2::ZERO) < 0.0);
        assert!((eval_2d(&rr, Vec2::new(2.0, 0.0)) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn subtract_2d() {
        let s = Sdf2dNode::circle(2.0).subtract(Sdf2dNode::circle(1.0));
        // Origin: inside the hole
        assert!(eval_2d(&s, Vec2::ZERO) > 0.0);
        // Ring interior
        assert!(eval_2d(&s, Vec2::new(1.5, 0.0)) < 0.0);
    }

    #[test]
    fn intersect_2d() {
        let s = Sdf2dNode::circle(1.0).intersect(Sdf2dNode::rect(0.5, 2.0));
        // Rect wall is nearer than the circle
        assert!((eval_2d(&s, Vec2::ZERO) + 0.5).abs() < 1e-5);
        // Inside the circle, outside the rect
        assert!((eval_2d(&s, Vec2::new(0.75, 0.0)) - 0.25).abs() < 1e-5);
        // Circle boundary inside the rect
        assert!(eval_2d(&s, Vec2::new(0.0, 1.0)).abs() < 1e-5);
        assert_eq!(s.node_count(), 3);
    }

    #[test]
    fn smooth_union_2d() {
        let a = Sdf2dNode::circle(1.0).translate(-0.5, 0.0);
        let b = Sdf2dNode::circle(1.0).translate(0.5, 0.0);
        let s = a.smooth_union(b, 0.5);
        assert!(eval_2d(&s, Vec2::ZERO) < 0.0);
    }

    #[test]
    fn scale_and_rotate_2d() {
        let c = Sdf2dNode::circle(1.0).scale(2.0);
        assert!(eval_2d(&c, Vec2::new(2.0, 0.0)).abs() < 1e-4);

        let rotated = Sdf2dNode::rect(2.0, 0.1).rotate(std::f32::consts::FRAC_PI_2);
        assert!(eval_2d(&rotated, Vec2::new(0.0, 1.5)) < 0.0);
    }

    #[test]
    fn line_distance() {
        let l = Sdf2dNode::line(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.1);
        assert!(eval_2d(&l, Vec2::new(0.5, 0.0)) < 0.0);
        let d = eval_2d(&l, Vec2::new(0.5, 1.0));
        assert!((d - 0.9).abs() < 1e-4);
    }

    #[test]
    fn slice_of_sphere_is_circle() {
        let slice = Sdf2dNode::slice(SdfNode::sphere(1.0), 0.6);
        // Section radius is 0.8 at z = 0.6
        let d = eval_2d(&slice, Vec2::new(0.8, 0.0));
        assert!(d.abs() < 1e-5, "got {}", d);
        assert_eq!(slice.node_count(), 2);
    }

    #[test]
    fn batch_eval() {
        let c = Sdf2dNode::circle(1.0);
        let results = eval_2d_batch(&c, &[Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
        assert_eq!(results.len(), 3);
        assert!(results[0] < 0.0);
        assert!(results[1].abs() < 1e-5);
        assert!(results[2] > 0.0);
    }
}
