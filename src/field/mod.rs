//! Scalar fields
//!
//! A scalar field maps a point in space to a value. Fields travel between
//! nodes as shared [`FieldRef`] handles and are never mutated once built.

#[cfg(feature = "sdf")]
mod sdf;

#[cfg(feature = "sdf")]
pub use sdf::{scalar_field_to_sdf_2d, Sdf2d, Sdf2dScalarField, Sdf3d, SdfScalarField};

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use rayon::prelude::*;

#[cfg(feature = "sdf")]
use crate::types::SdfNode;

/// Shared handle to an immutable scalar field
pub type FieldRef = Arc<dyn ScalarField>;

/// A function from 3D points to scalar values
pub trait ScalarField: fmt::Debug + Send + Sync {
    /// Value of the field at `point`
    fn evaluate(&self, point: Vec3) -> f32;

    /// Values of the field at many points
    fn evaluate_batch(&self, points: &[Vec3]) -> Vec<f32> {
        points.par_iter().map(|&p| self.evaluate(p)).collect()
    }

    /// The serializable 3D SDF backing this field, if any
    #[cfg(feature = "sdf")]
    fn as_sdf(&self) -> Option<&SdfNode> {
        None
    }

    /// The 2D SDF backing this field, if any
    #[cfg(feature = "sdf")]
    fn as_sdf_2d(&self) -> Option<&Sdf2d> {
        None
    }
}

/// Field with the same value everywhere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantField(pub f32);

impl ScalarField for ConstantField {
    fn evaluate(&self, _point: Vec3) -> f32 {
        self.0
    }
}

/// Field defined by a closure
pub struct FnField<F> {
    name: &'static str,
    func: F,
}

impl<F> FnField<F>
where
    F: Fn(Vec3) -> f32 + Send + Sync,
{
    /// Wrap `func` as a field; `name` is only used for debug output
    pub fn new(name: &'static str, func: F) -> Self {
        FnField { name, func }
    }
}

impl<F> fmt::Debug for FnField<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnField").field("name", &self.name).finish()
    }
}

impl<F> ScalarField for FnField<F>
where
    F: Fn(Vec3) -> f32 + Send + Sync,
{
    fn evaluate(&self, point: Vec3) -> f32 {
        (self.func)(point)
    }
}
