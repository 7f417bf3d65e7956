//! Node implementations and their registration

#[cfg(feature = "sdf")]
mod sdf_extrude;

#[cfg(feature = "sdf")]
pub use sdf_extrude::SdfExtrudeNode;

use crate::dependencies::{self, Dependencies};
use crate::error::RegistryError;
use crate::tree::NodeRegistry;

/// Identifier of the SDF extrude node
pub const SDF_EXTRUDE_IDNAME: &str = "SdfExtrudeNode";
/// Label of the SDF extrude node
pub const SDF_EXTRUDE_LABEL: &str = "SDF Extrude";

/// Register all nodes
///
/// Nodes whose backend is unavailable are registered as inert placeholders
/// under their usual identifier.
pub fn register(registry: &mut NodeRegistry, deps: &Dependencies) -> Result<(), RegistryError> {
    if deps.sdf && register_sdf_nodes(registry)? {
        return Ok(());
    }
    registry.add_dummy(SDF_EXTRUDE_IDNAME, SDF_EXTRUDE_LABEL, dependencies::SDF)
}

/// Remove every class registered by [`register`]
pub fn unregister(registry: &mut NodeRegistry) -> Result<(), RegistryError> {
    registry.unregister_class(SDF_EXTRUDE_IDNAME).map(|_| ())
}

/// Registry holding every node available in this build
pub fn default_registry() -> Result<NodeRegistry, RegistryError> {
    let mut registry = NodeRegistry::new();
    register(&mut registry, &Dependencies::detect())?;
    Ok(registry)
}

#[cfg(feature = "sdf")]
fn register_sdf_nodes(registry: &mut NodeRegistry) -> Result<bool, RegistryError> {
    registry.register::<SdfExtrudeNode>()?;
    Ok(true)
}

#[cfg(not(feature = "sdf"))]
fn register_sdf_nodes(_registry: &mut NodeRegistry) -> Result<bool, RegistryError> {
    Ok(false)
}
