//! Optional dependency probing
//!
//! Nodes backed by an optional library check [`Dependencies`] at
//! registration time and fall back to placeholders when it is missing.

/// Name of the SDF backend as reported by placeholder nodes
pub const SDF: &str = "sdf";

/// Availability of optional backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependencies {
    /// SDF backend (cargo feature `sdf`)
    pub sdf: bool,
}

impl Dependencies {
    /// Backends compiled into this build
    pub fn detect() -> Self {
        Dependencies {
            sdf: cfg!(feature = "sdf"),
        }
    }

    /// No optional backend at all
    pub fn none() -> Self {
        Dependencies { sdf: false }
    }

    /// Names of the missing backends
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.sdf {
            missing.push(SDF);
        }
        missing
    }
}

impl Default for Dependencies {
    fn default() -> Self {
        Self::detect()
    }
}
