//! Tool registry, argument resolution and composition

pub mod arg;
pub mod base;
pub mod builtin;
pub mod compose;
pub mod help;
pub mod registry;
pub mod resolver;
pub mod settings;

pub use arg::{ArgKind, ArgSpec, ArgValue, ResolvedOptions};
pub use base::{ToolBehavior, ToolInstance};
pub use compose::ToolComposer;
pub use registry::{CategoryInfo, PluginDescriptor, ToolRegistry};
pub use resolver::ArgumentResolver;
pub use settings::{
    tools_from_settings, CommandSettings, GlobalOptions, ToolSet, OPTIONSET_CATEGORY,
};
