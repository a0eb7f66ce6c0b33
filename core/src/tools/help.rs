//! Help and introspection surface
//!
//! Serializable summaries of the registered categories and plugins, consumed
//! by the CLI help output and any other front end.

use serde::Serialize;

use crate::error::Result;
use crate::tools::arg::ArgValue;
use crate::tools::registry::ToolRegistry;

/// One category's CLI surface: short flag, long flag, and a help text that
/// lists the registered plugin names.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOption {
    pub short_flag: String,
    pub long_flag: String,
    pub help: String,
}

/// The CLI surface of every registered category, in sorted order.
pub fn category_options(registry: &ToolRegistry) -> Vec<CategoryOption> {
    registry
        .categories()
        .map(|info| {
            let plugins = registry.plugin_names(info.name()).join(", ");
            CategoryOption {
                short_flag: format!("-{}", info.short_opt()),
                long_flag: format!("--{}", info.name()),
                help: format!("{} ({})", info.help(), plugins),
            }
        })
        .collect()
}

/// Help entry for one argument of a plugin.
#[derive(Debug, Clone, Serialize)]
pub struct ArgHelp {
    pub name: String,
    pub doc: String,
    pub default: ArgValue,
    pub choices: Option<Vec<String>>,
}

/// Help entry for one plugin.
#[derive(Debug, Clone, Serialize)]
pub struct PluginHelp {
    pub category: String,
    pub name: String,
    pub fundamental: bool,
    pub args: Vec<ArgHelp>,
}

/// Describe one plugin's argument surface.
///
/// Arguments flagged as hidden are excluded unless `include_hidden` is set.
pub fn plugin_help(
    registry: &ToolRegistry,
    category: &str,
    name: &str,
    include_hidden: bool,
) -> Result<PluginHelp> {
    let descriptor = registry.lookup(category, name)?;
    let args = descriptor
        .args()
        .iter()
        .filter(|spec| include_hidden || spec.is_visible())
        .map(|spec| ArgHelp {
            name: spec.name().to_string(),
            doc: spec.doc().to_string(),
            default: spec.default_value().clone(),
            choices: spec.choice_set().map(<[String]>::to_vec),
        })
        .collect();
    Ok(PluginHelp {
        category: category.to_string(),
        name: name.to_string(),
        fundamental: descriptor.is_fundamental(),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::tools::arg::{ArgKind, ArgSpec, ResolvedOptions};
    use crate::tools::base::ToolBehavior;
    use crate::tools::registry::{CategoryInfo, PluginDescriptor};
    use std::any::Any;
    use std::sync::Arc;

    struct Noop;

    impl ToolBehavior for Noop {
        fn invoke(&self, _options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
            Ok(())
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register_category(CategoryInfo::new("style", 's', "style plugins"))
            .unwrap();
        registry
            .register(
                "style",
                PluginDescriptor::new("qcd", Arc::new(Noop))
                    .arg(
                        ArgSpec::new("scheme", ArgKind::Str, "color assignment scheme")
                            .default("rgb")
                            .choices(["rgb", "rainbow"]),
                    )
                    .arg(ArgSpec::new("seed", ArgKind::Int, "shuffle seed").hidden()),
            )
            .unwrap();
        registry
            .register("style", PluginDescriptor::new("mono", Arc::new(Noop)))
            .unwrap();
        registry
    }

    #[test]
    fn test_category_options_list_plugins() {
        let options = category_options(&registry());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].short_flag, "-s");
        assert_eq!(options[0].long_flag, "--style");
        assert_eq!(options[0].help, "style plugins (mono, qcd)");
    }

    #[test]
    fn test_plugin_help_filters_hidden_args() {
        let registry = registry();
        let help = plugin_help(&registry, "style", "qcd", false).unwrap();
        assert_eq!(help.args.len(), 1);
        assert_eq!(help.args[0].name, "scheme");
        assert_eq!(
            help.args[0].choices,
            Some(vec!["rgb".to_string(), "rainbow".to_string()])
        );

        let help = plugin_help(&registry, "style", "qcd", true).unwrap();
        assert_eq!(help.args.len(), 2);
    }

    #[test]
    fn test_plugin_help_serializes() {
        let registry = registry();
        let help = plugin_help(&registry, "style", "qcd", false).unwrap();
        let json = serde_json::to_value(&help).unwrap();
        assert_eq!(json["name"], "qcd");
        assert_eq!(json["args"][0]["default"], "rgb");
    }
}
