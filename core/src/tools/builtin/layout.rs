//! Layout plugins: mergeable, anchored by one fundamental base layout

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
use crate::tools::base::ToolBehavior;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};

pub fn register(registry: &mut ToolRegistry) -> Result<()> {
    registry.register_category(
        CategoryInfo::new("layout", 'l', "layout classes")
            .mergeable()
            .global_arg("label_size"),
    )?;
    registry.register(
        "layout",
        PluginDescriptor::new("feynman", Arc::new(FeynmanLayout))
            .fundamental()
            .arg(
                ArgSpec::new("spread", ArgKind::Float, "horizontal spread between generations")
                    .default(1.0),
            )
            .arg(
                ArgSpec::new("gluid", ArgKind::Bool, "label gluons with their internal ids")
                    .default(false)
                    .hidden(),
            ),
    )?;
    registry.register(
        "layout",
        PluginDescriptor::new("dual", Arc::new(DualLayout)).fundamental().arg(
            ArgSpec::new("node_size", ArgKind::Float, "size of particle nodes").default(0.5),
        ),
    )?;
    registry.register(
        "layout",
        PluginDescriptor::new("phi", Arc::new(PhiLayout)).arg(
            ArgSpec::new("scale", ArgKind::Float, "scale of the azimuthal expansion")
                .default(1.0),
        ),
    )?;
    Ok(())
}

/// Particles on edges, vertices as nodes.
struct FeynmanLayout;

impl ToolBehavior for FeynmanLayout {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!(
            "feynman layout: spread={:?} label_size={:?}",
            options.get_f64("spread"),
            options.get_f64("label_size")
        );
        Ok(())
    }
}

/// Particles as nodes, interactions as edges.
struct DualLayout;

impl ToolBehavior for DualLayout {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("dual layout: node_size={:?}", options.get_f64("node_size"));
        Ok(())
    }
}

/// Spreads the initial particles by their azimuthal angle.
struct PhiLayout;

impl ToolBehavior for PhiLayout {
    fn invoke(&self, options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
        tracing::debug!("phi layout: scale={:?}", options.get_f64("scale"));
        Ok(())
    }
}
