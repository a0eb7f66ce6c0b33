//! Layout engines: run the positioned graph through a placement algorithm

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(CategoryInfo::new("layout-engine", 'e', "layout engines"))?;
    registry.register(
        "layout-engine",
        PluginDescriptor::new("dot", Arc::new(DotEngine)).arg(
            ArgSpec::new("orientation", ArgKind::Str, "page orientation")
                .default("portrait")
                .choices(["portrait", "landscape"]),
        ),
    )?;
    registry.register(
        "layout-engine",
        PluginDescriptor::new("fdp", Arc::new(FdpEngine)).arg(
            ArgSpec::new("iterations", ArgKind::Int, "maximum force-directed iterations")
                .default(600),
        ),
    )?;
    Ok(())
}

/// Hierarchical ranking, natural for the time ordering of an event.
struct DotEngine;

impl ToolBehavior for DotEngine {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!(
            "dot engine: orientation={:?}",
            options.get_str("orientation")
        );
        Ok(())
    }
}

/// Force-directed placement.
struct FdpEngine;

impl ToolBehavior for FdpEngine {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("fdp engine: iterations={:?}", options.get_i64("iterations"));
        Ok(())
    }
}
