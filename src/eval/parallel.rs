//! Parallel SDF evaluation
//!
//! Batch evaluation using rayon for CPU parallelism.

use crate::eval::eval;
use crate::types::SdfNode;
use glam::Vec3;
use rayon::prelude::*;

/// Evaluate SDF at multiple points (single-threaded)
#[inline]
pub fn eval_batch(node: &SdfNode, points: &[Vec3]) -> Vec<f32> {
    points.iter().map(|&p| eval(node, p)).collect()
}

/// Evaluate SDF at multiple points (parallel)
///
/// Uses rayon for parallel iteration over points.
#[inline]
pub fn eval_batch_parallel(node: &SdfNode, points: &[Vec3]) -> Vec<f32> {
    points.par_iter().map(|&p| eval(node, p)).collect()
}

/// Evaluate SDF on a 3D grid
///
/// Z-slices are filled in parallel.
///
/// # Arguments
/// * `node` - The SDF tree
/// * `min` - Minimum corner of the grid
/// * `max` - Maximum corner of the grid
/// * `resolution` - Number of samples along each axis (at least 2)
///
/// # Returns
/// Flattened grid of distances (in X-major order: x + y*res + z*res*res)
pub fn eval_grid(node: &SdfNode, min: Vec3, max: Vec3, resolution: usize) -> Vec<f32> {
    if resolution < 2 {
        return vec![eval(node, min); resolution];
    }
    let step = (max - min) / (resolution as f32 - 1.0);
    let slice_size = resolution * resolution;
    let mut buffer = vec![0.0f32; slice_size * resolution];

    buffer
        .par_chunks_mut(slice_size)
        .enumerate()
        .for_each(|(z, slice)| {
            let z_pos = min.z + z as f32 * step.z;
            for y in 0..resolution {
                let y_pos = min.y + y as f32 * step.y;
                let row = &mut slice[y * resolution..(y + 1) * resolution];
                for (x, out) in row.iter_mut().enumerate() {
                    let x_pos = min.x + x as f32 * step.x;
                    *out = eval(node, Vec3::new(x_pos, y_pos, z_pos));
                }
            }
        });

    buffer
}
