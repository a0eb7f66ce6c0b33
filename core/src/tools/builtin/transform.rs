//! Graph transforms, applied to the graph view in the order they were listed

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(CategoryInfo::new("transform", 't', "graph transforms"))?;
    registry.register(
        "transform",
        PluginDescriptor::new("contract", Arc::new(Contract)).arg(
            ArgSpec::new("which", ArgKind::Str, "which structures to contract")
                .default("all")
                .choices(["gluballs", "kinks", "all"]),
        ),
    )?;
    registry.register(
        "transform",
        PluginDescriptor::new("prune", Arc::new(Prune)).arg(
            ArgSpec::new(
                "depth",
                ArgKind::Int,
                "drop particles further than this many vertices from the interaction",
            )
            .default(3),
        ),
    )?;
    Ok(())
}

/// Collapses uninteresting structures into single vertices.
struct Contract;

impl ToolBehavior for Contract {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("contract transform: which={:?}", options.get_str("which"));
        Ok(())
    }
}

/// Cuts the graph down to a neighbourhood of the hard interaction.
struct Prune;

impl ToolBehavior for Prune {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("prune transform: depth={:?}", options.get_i64("depth"));
        Ok(())
    }
}
