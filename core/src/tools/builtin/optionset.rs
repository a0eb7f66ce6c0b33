//! Optionsets: one-shot presets applied before any other category resolves

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::ResolvedOptions;
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};
use crate::tools::settings::{CommandSettings, OPTIONSET_CATEGORY};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(CategoryInfo::new(
        OPTIONSET_CATEGORY,
        'O',
        "option presets rewriting other tool settings",
    ))?;
    registry.register(
        OPTIONSET_CATEGORY,
        PluginDescriptor::new("default", Arc::new(DefaultSet)),
    )?;
    Ok(())
}

/// Fills in a minimal working pipeline for every stage the user left empty.
struct DefaultSet;

impl ToolBehavior for DefaultSet {
    fn invoke(&self, _options: &ResolvedOptions, target: &mut dyn Any) -> Result<()> {
        let settings = target
            .downcast_mut::<CommandSettings>()
            .ok_or("optionset target is not CommandSettings")?;
        for (category, command) in [
            ("layout", "feynman"),
            ("layout-engine", "dot"),
            ("painter", "svg"),
        ] {
            if settings.is_empty(category) {
                tracing::debug!("optionset default: adding {category} '{command}'");
                settings.push(category, command);
            }
        }
        Ok(())
    }
}
