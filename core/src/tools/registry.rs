//! Tool registry: category metadata and plugin descriptors

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{ConfigurationError, Result};
use crate::tools::arg::ArgSpec;
use crate::tools::base::ToolBehavior;

/// Metadata for one tool category, fixed at registration time.
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    name: String,
    short_opt: char,
    help: String,
    merge: bool,
    global_args: Vec<String>,
}

impl CategoryInfo {
    pub fn new(name: impl Into<String>, short_opt: char, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_opt,
            help: help.into(),
            merge: false,
            global_args: Vec::new(),
        }
    }

    /// Mark instances of this category as merged into one composed tool.
    /// Exactly one fundamental constituent is then required per composition.
    pub fn mergeable(mut self) -> Self {
        self.merge = true;
        self
    }

    /// Declare a global argument copied into every plugin of this category.
    pub fn global_arg(mut self, name: impl Into<String>) -> Self {
        self.global_args.push(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_opt(&self) -> char {
        self.short_opt
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn is_mergeable(&self) -> bool {
        self.merge
    }

    pub fn global_args(&self) -> &[String] {
        &self.global_args
    }
}

/// Descriptor for one registered plugin: its argument surface and behavior.
#[derive(Clone)]
pub struct PluginDescriptor {
    name: String,
    args: Vec<ArgSpec>,
    global_args: Vec<String>,
    fundamental: bool,
    behavior: Arc<dyn ToolBehavior>,
}

impl std::fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("global_args", &self.global_args)
            .field("fundamental", &self.fundamental)
            .finish_non_exhaustive()
    }
}

impl PluginDescriptor {
    pub fn new(name: impl Into<String>, behavior: Arc<dyn ToolBehavior>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            global_args: Vec::new(),
            fundamental: false,
            behavior,
        }
    }

    pub fn arg(mut self, spec: ArgSpec) -> Self {
        self.args.push(spec);
        self
    }

    pub fn global_arg(mut self, name: impl Into<String>) -> Self {
        self.global_args.push(name.into());
        self
    }

    /// Mark this plugin as the mandatory anchor for merged compositions.
    pub fn fundamental(mut self) -> Self {
        self.fundamental = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    pub fn global_args(&self) -> &[String] {
        &self.global_args
    }

    pub fn is_fundamental(&self) -> bool {
        self.fundamental
    }

    pub fn behavior(&self) -> &Arc<dyn ToolBehavior> {
        &self.behavior
    }
}

/// Process-wide mapping from category name to metadata and from
/// (category, plugin name) to descriptor.
///
/// Populated once at startup via explicit registration calls, read-only
/// afterwards; every resolution path takes `&self`. `BTreeMap` backing keeps
/// iteration order sorted and deterministic.
#[derive(Default)]
pub struct ToolRegistry {
    categories: BTreeMap<String, CategoryInfo>,
    plugins: BTreeMap<String, BTreeMap<String, PluginDescriptor>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the builtin plugin catalog.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        crate::tools::builtin::register_all(&mut registry)?;
        Ok(registry)
    }

    /// Add a new category. Registering the same category twice is an error.
    pub fn register_category(&mut self, info: CategoryInfo) -> Result<()> {
        if self.categories.contains_key(info.name()) {
            return Err(ConfigurationError::DuplicateCategory {
                name: info.name().to_string(),
            }
            .into());
        }
        self.plugins.insert(info.name().to_string(), BTreeMap::new());
        self.categories.insert(info.name().to_string(), info);
        Ok(())
    }

    /// Add a plugin descriptor to an existing category. Registering the same
    /// plugin identifier twice is an error, not a silent overwrite.
    pub fn register(&mut self, category: &str, descriptor: PluginDescriptor) -> Result<()> {
        let plugins = self
            .plugins
            .get_mut(category)
            .ok_or_else(|| ConfigurationError::UnknownCategory {
                name: category.to_string(),
            })?;
        if plugins.contains_key(descriptor.name()) {
            return Err(ConfigurationError::DuplicateRegistration {
                category: category.to_string(),
                name: descriptor.name().to_string(),
            }
            .into());
        }
        plugins.insert(descriptor.name().to_string(), descriptor);
        Ok(())
    }

    pub fn category(&self, name: &str) -> Result<&CategoryInfo> {
        self.categories
            .get(name)
            .ok_or_else(|| {
                ConfigurationError::UnknownCategory {
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Look up a plugin descriptor; the error lists the registered names.
    pub fn lookup(&self, category: &str, name: &str) -> Result<&PluginDescriptor> {
        let plugins = self
            .plugins
            .get(category)
            .ok_or_else(|| ConfigurationError::UnknownCategory {
                name: category.to_string(),
            })?;
        plugins.get(name).ok_or_else(|| {
            ConfigurationError::UnknownPlugin {
                category: category.to_string(),
                name: name.to_string(),
                available: plugins.keys().cloned().collect::<Vec<_>>().join(", "),
            }
            .into()
        })
    }

    /// All categories in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryInfo> {
        self.categories.values()
    }

    /// Registered plugin names of one category, sorted.
    pub fn plugin_names(&self, category: &str) -> Vec<&str> {
        self.plugins
            .get(category)
            .map(|plugins| plugins.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Names of the fundamental plugins of one category, sorted.
    pub fn fundamentals(&self, category: &str) -> Vec<&str> {
        self.plugins
            .get(category)
            .map(|plugins| {
                plugins
                    .values()
                    .filter(|d| d.is_fundamental())
                    .map(PluginDescriptor::name)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Dump every category and plugin at debug level.
    pub fn debug_dump(&self) {
        for info in self.categories.values() {
            tracing::debug!(
                "category '{}'; short option: -{}; merge: {}",
                info.name(),
                info.short_opt(),
                info.is_mergeable()
            );
            if let Some(plugins) = self.plugins.get(info.name()) {
                for descriptor in plugins.values() {
                    tracing::debug!(
                        "  {} '{}'; fundamental: {}; args: {:?}; global args: {:?}",
                        info.name(),
                        descriptor.name(),
                        descriptor.is_fundamental(),
                        descriptor
                            .args()
                            .iter()
                            .map(ArgSpec::name)
                            .collect::<Vec<_>>(),
                        descriptor.global_args()
                    );
                }
            }
        }
    }
}
