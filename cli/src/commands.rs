//! CLI command implementations

use anyhow::{Context, Result};
use eventvis_core::tools::help;
use eventvis_core::{tools_from_settings, CommandSettings, GlobalOptions, ToolRegistry};

use crate::Cli;

/// Print the registered tool catalog: one line per category flag, then every
/// plugin with its visible arguments.
pub fn tools_command(registry: &ToolRegistry) -> Result<()> {
    for option in help::category_options(registry) {
        println!("{}, {}", option.short_flag, option.long_flag);
        println!("    {}", option.help);
    }

    for info in registry.categories() {
        println!();
        for name in registry.plugin_names(info.name()) {
            let plugin = help::plugin_help(registry, info.name(), name, false)?;
            let anchor = if plugin.fundamental { " (fundamental)" } else { "" };
            println!("{} {}{}", info.name(), plugin.name, anchor);
            for arg in &plugin.args {
                let choices = arg
                    .choices
                    .as_ref()
                    .map(|c| format!(" [{}]", c.join("|")))
                    .unwrap_or_default();
                println!("    {}={}{}  {}", arg.name, arg.default, choices, arg.doc);
            }
        }
    }
    Ok(())
}

/// Resolve the requested tool set and report every instance with its
/// validated options.
pub fn resolve_command(registry: &ToolRegistry, cli: &Cli) -> Result<()> {
    let mut settings = CommandSettings::new();
    let per_category: [(&str, &Vec<String>); 7] = [
        ("optionset", &cli.optionset),
        ("layout", &cli.layout),
        ("layout-engine", &cli.layout_engine),
        ("transform", &cli.transform),
        ("annotation", &cli.annotation),
        ("style", &cli.style),
        ("painter", &cli.painter),
    ];
    for (category, commands) in per_category {
        for command in commands {
            settings.push(category, command.clone());
        }
    }

    let globals = GlobalOptions::new()
        .with("label_size", cli.label_size)
        .with("output", cli.output.clone());
    tracing::debug!("resolving tool set from {settings:?}");

    let tools = tools_from_settings(registry, settings, &globals)
        .context("could not resolve the requested tool set")?;

    for (category, instances) in tools.iter() {
        for tool in instances {
            println!("{} {}", category, tool.name());
            println!("{}", serde_json::to_string_pretty(tool.options())?);
        }
    }
    Ok(())
}
