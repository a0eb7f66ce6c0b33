//! # eventvis Core
//!
//! Core library for eventvis - a particle event graph visualizer.
//!
//! This crate owns the tool registry and the configuration pipeline: it turns
//! user-supplied, colon/equals-delimited command strings into validated, fully
//! configured tool instances, organized by category (layout, transform,
//! style, ...). The graph data model, layout geometry, styling algorithms and
//! painting backends live in collaborator crates and consume the instances
//! produced here through the narrow [`tools::ToolBehavior`] contract.

// Core modules
pub mod error;
pub mod tools;

// Re-export commonly used types
pub use error::{ConfigurationError, Error, Result};
pub use tools::{
    tools_from_settings, ArgKind, ArgSpec, ArgValue, ArgumentResolver, CategoryInfo,
    CommandSettings, GlobalOptions, PluginDescriptor, ResolvedOptions, ToolBehavior, ToolComposer,
    ToolInstance, ToolRegistry, ToolSet,
};

/// Current version of the eventvis-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
