//! SDF Extrude node
//!
//! Turns 2D scalar fields into 3D SDF fields by sweeping them along Z.
//!
//! Inputs: `SDF` (fields), `Height` (numbers, bound to the `height`
//! property). Output: `SDF` (fields). Fields pair with heights by the
//! repeat-last rule at both nesting levels, and a flat field list produces a
//! flat output list.

use std::sync::Arc;

use tracing::debug;

use super::{SDF_EXTRUDE_IDNAME, SDF_EXTRUDE_LABEL};
use crate::data::{zip_long_repeat, Data};
use crate::error::NodeError;
use crate::field::{scalar_field_to_sdf_2d, FieldRef, SdfScalarField};
use crate::tree::{Node, NodeState, NodeType, Property, SocketKind};

/// Input and output socket carrying fields
pub const SDF_SOCKET: &str = "SDF";
/// Input socket carrying heights
pub const HEIGHT_SOCKET: &str = "Height";
/// Property feeding the height socket while it is unlinked
pub const HEIGHT_PROPERTY: &str = "height";
/// Default extrusion height
pub const DEFAULT_HEIGHT: f32 = 1.0;

/// Extrudes 2D SDF fields into 3D SDF fields
#[derive(Debug, Default, Clone, Copy)]
pub struct SdfExtrudeNode;

impl NodeType for SdfExtrudeNode {
    const IDNAME: &'static str = SDF_EXTRUDE_IDNAME;
    const LABEL: &'static str = SDF_EXTRUDE_LABEL;
}

impl Node for SdfExtrudeNode {
    fn init(&mut self, state: &mut NodeState) {
        state.add_property(HEIGHT_PROPERTY, Property::new("Height", DEFAULT_HEIGHT));
        state.new_input(SocketKind::ScalarField, SDF_SOCKET);
        state
            .new_input(SocketKind::Strings, HEIGHT_SOCKET)
            .set_prop_name(HEIGHT_PROPERTY);
        state.new_output(SocketKind::ScalarField, SDF_SOCKET);
    }

    fn process(&mut self, state: &mut NodeState) -> Result<(), NodeError> {
        if !state.any_output_linked() {
            return Ok(());
        }

        let sdf_s = state.get(SDF_SOCKET)?;
        let height_s = state.get(HEIGHT_SOCKET)?;

        let flat_output = sdf_s.nesting_level() == 1;
        let sdf_s = sdf_s.ensure_nesting_level(2)?;
        let height_s = height_s.ensure_nesting_level(2)?;

        let mut sdf_out = Vec::new();
        for (fields, heights) in zip_long_repeat(sdf_s.as_list()?, height_s.as_list()?) {
            let mut new_sdf = Vec::new();
            for (field, height) in zip_long_repeat(fields.as_list()?, heights.as_list()?) {
                let extruded = extrude_field(field.as_field()?, height.as_number()?);
                new_sdf.push(Data::Field(extruded));
            }
            if flat_output {
                sdf_out.extend(new_sdf);
            } else {
                sdf_out.push(Data::List(new_sdf));
            }
        }

        debug!(count = sdf_out.len(), flat_output, "extruded fields");
        state.set(SDF_SOCKET, Data::List(sdf_out))
    }
}

/// Extrude one field by `height`, sampling its profile on `z = 0`
pub fn extrude_field(field: &FieldRef, height: f32) -> FieldRef {
    let sdf_2d = scalar_field_to_sdf_2d(field, 0.0);
    Arc::new(SdfScalarField::new(sdf_2d.extrude(height)))
}
