//! Top-level orchestration: raw command settings to ready tool instances

use std::any::Any;
use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::tools::arg::ArgValue;
use crate::tools::base::ToolInstance;
use crate::tools::compose::ToolComposer;
use crate::tools::registry::ToolRegistry;
use crate::tools::resolver::split_unescaped;

/// Category whose plugins are resolved and applied before everything else and
/// may rewrite the raw settings of every other category.
pub const OPTIONSET_CATEGORY: &str = "optionset";

/// Read-only mapping from global-argument name to value, supplied by the
/// CLI-parsing collaborator. This crate never parses CLI flags itself, it only
/// looks values up by name.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    values: BTreeMap<String, ArgValue>,
}

impl GlobalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }
}

/// Raw per-category command strings, mutable until resolution starts so that
/// optionset plugins can rewrite them.
#[derive(Debug, Clone, Default)]
pub struct CommandSettings {
    commands: BTreeMap<String, Vec<String>>,
}

impl CommandSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: impl Into<String>, command: impl Into<String>) {
        self.commands
            .entry(category.into())
            .or_default()
            .push(command.into());
    }

    pub fn set(&mut self, category: impl Into<String>, commands: Vec<String>) {
        self.commands.insert(category.into(), commands);
    }

    pub fn get(&self, category: &str) -> &[String] {
        self.commands
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self, category: &str) -> bool {
        self.get(category).is_empty()
    }

    fn take(&mut self, category: &str) -> Vec<String> {
        self.commands.remove(category).unwrap_or_default()
    }

    fn leftover_category(&self) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, commands)| !commands.is_empty())
            .map(|(category, _)| category.as_str())
    }
}

/// Split one command string into plugin name and raw argument tokens, on
/// unescaped colons.
pub fn parse_command(raw: &str) -> (String, Vec<String>) {
    let mut parts = split_unescaped(raw, ':').into_iter();
    let name = parts.next().unwrap_or_default();
    (name, parts.collect())
}

/// Ordered tool instances per category, the product of one resolution pass.
#[derive(Debug, Default)]
pub struct ToolSet {
    tools: BTreeMap<String, Vec<ToolInstance>>,
}

impl ToolSet {
    pub fn get(&self, category: &str) -> &[ToolInstance] {
        self.tools
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn take(&mut self, category: &str) -> Vec<ToolInstance> {
        self.tools.remove(category).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ToolInstance])> {
        self.tools
            .iter()
            .map(|(category, tools)| (category.as_str(), tools.as_slice()))
    }

    /// Invoke every instance of a category against the target, in order.
    pub fn apply(&self, category: &str, target: &mut dyn Any) -> Result<()> {
        for tool in self.get(category) {
            tracing::debug!("applying {tool}");
            tool.invoke(target)?;
        }
        Ok(())
    }
}

/// Resolve every category's command strings into ready tool instances.
///
/// The `optionset` category is resolved and applied first: each optionset
/// instance is invoked with the mutable [`CommandSettings`] and may rewrite
/// the raw strings of every other category before those are resolved. This is
/// a one-shot preprocessing pass, not a dependency graph. The first error
/// aborts the whole pass; downstream consumers always see a fully configured
/// tool set or none at all.
pub fn tools_from_settings(
    registry: &ToolRegistry,
    mut settings: CommandSettings,
    globals: &GlobalOptions,
) -> Result<ToolSet> {
    registry.debug_dump();
    let composer = ToolComposer::new(registry);
    let mut set = ToolSet::default();

    if registry.category(OPTIONSET_CATEGORY).is_ok() {
        let commands = settings.take(OPTIONSET_CATEGORY);
        let optionsets = build_category(registry, &composer, OPTIONSET_CATEGORY, commands, globals)?;
        for tool in &optionsets {
            tracing::debug!("applying {tool} to the command settings");
            tool.invoke(&mut settings)?;
        }
        set.tools.insert(OPTIONSET_CATEGORY.to_string(), optionsets);
    }

    let categories: Vec<String> = registry
        .categories()
        .map(|info| info.name().to_string())
        .collect();
    for category in categories {
        if category == OPTIONSET_CATEGORY {
            continue;
        }
        let commands = settings.take(&category);
        let tools = build_category(registry, &composer, &category, commands, globals)?;
        set.tools.insert(category, tools);
    }

    if let Some(stray) = settings.leftover_category() {
        return Err(ConfigurationError::UnknownCategory {
            name: stray.to_string(),
        }
        .into());
    }

    Ok(set)
}

fn build_category(
    registry: &ToolRegistry,
    composer: &ToolComposer<'_>,
    category: &str,
    commands: Vec<String>,
    globals: &GlobalOptions,
) -> Result<Vec<ToolInstance>> {
    let mut selected = Vec::new();
    for raw in &commands {
        let (name, tokens) = parse_command(raw);
        let descriptor = registry.lookup(category, &name)?;
        selected.push((descriptor.clone(), tokens));
    }
    composer.build(category, selected, globals)
}
