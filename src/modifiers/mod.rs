//! Modifier operations for SDFs
//!
//! Modifiers reshape the domain before (or after) a child distance is
//! evaluated.

mod extrude;

pub use extrude::{modifier_extrude, modifier_extrude_point};
