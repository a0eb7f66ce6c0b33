//! Annotations drawn onto the layouted graph

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(CategoryInfo::new("annotation", 'a', "graph annotations"))?;
    registry.register(
        "annotation",
        PluginDescriptor::new("index", Arc::new(Index)),
    )?;
    registry.register(
        "annotation",
        PluginDescriptor::new("pt", Arc::new(TransverseMomentum)).arg(
            ArgSpec::new(
                "precision",
                ArgKind::Int,
                "decimal places for transverse momentum labels",
            )
            .default(2),
        ),
    )?;
    Ok(())
}

/// Labels every particle with its event-record index.
struct Index;

impl ToolBehavior for Index {
    fn invoke(&self, _options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("index annotation");
        Ok(())
    }
}

/// Labels every particle with its transverse momentum.
struct TransverseMomentum;

impl ToolBehavior for TransverseMomentum {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("pt annotation: precision={:?}", options.get_i64("precision"));
        Ok(())
    }
}
