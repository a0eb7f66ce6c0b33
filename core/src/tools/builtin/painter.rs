//! Painters producing output from the final layout

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(
        CategoryInfo::new("painter", 'p', "output painters").global_arg("output"),
    )?;
    registry.register(
        "painter",
        PluginDescriptor::new("svg", Arc::new(SvgPainter)).arg(
            ArgSpec::new("inline_styles", ArgKind::Bool, "embed styles into each element")
                .default(true)
                .hidden(),
        ),
    )?;
    registry.register(
        "painter",
        PluginDescriptor::new("dot-file", Arc::new(DotFilePainter)),
    )?;
    Ok(())
}

/// Writes the layouted graph as an SVG document.
struct SvgPainter;

impl ToolBehavior for SvgPainter {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("svg painter: output={:?}", options.get_str("output"));
        Ok(())
    }
}

/// Dumps the raw graphviz source instead of rendering it. Named `dot-file` to
/// stay distinct from the `dot` layout engine.
struct DotFilePainter;

impl ToolBehavior for DotFilePainter {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("dot-file painter: output={:?}", options.get_str("output"));
        Ok(())
    }
}
