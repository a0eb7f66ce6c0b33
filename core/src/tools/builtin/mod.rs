//! Builtin plugin catalog
//!
//! One module per category. Graph geometry and painting are owned by the
//! pipeline collaborators, so apart from optionsets (which rewrite the raw
//! command settings) the builtin behaviors trace their validated options and
//! leave the target to the collaborator that dispatched them.

pub mod annotation;
pub mod engine;
pub mod layout;
pub mod optionset;
pub mod painter;
pub mod style;
pub mod transform;

use crate::error::Result;
use crate::tools::registry::ToolRegistry;

/// Register every builtin category and plugin, in a fixed order.
///
/// This is the single initialization entry point; it runs once at startup,
/// before any resolution, and re-registration is an error.
pub fn register_all(registry: &mut ToolRegistry) -> Result<()> {
    optionset::register(registry)?;
    layout::register(registry)?;
    engine::register(registry)?;
    transform::register(registry)?;
    annotation::register(registry)?;
    style::register(registry)?;
    painter::register(registry)?;
    Ok(())
}
