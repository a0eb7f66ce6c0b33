//! Tool composition: standalone instantiation and fundamental-anchored merging

use crate::error::{ConfigurationError, Result};
use crate::tools::arg::ArgSpec;
use crate::tools::base::ToolInstance;
use crate::tools::registry::{CategoryInfo, PluginDescriptor, ToolRegistry};
use crate::tools::resolver::ArgumentResolver;
use crate::tools::settings::GlobalOptions;

/// Builds tool instances from looked-up descriptors and their raw tokens.
///
/// Plain categories instantiate each selected plugin independently. Mergeable
/// categories synthesize one composed tool from all selected plugins, anchored
/// by exactly one fundamental constituent; the composed argument table gives
/// later-listed constituents precedence on name collisions, mirroring
/// most-derived-overrides-base semantics without any inheritance relation.
pub struct ToolComposer<'a> {
    registry: &'a ToolRegistry,
}

impl<'a> ToolComposer<'a> {
    pub fn new(registry: &'a ToolRegistry) -> Self {
        Self { registry }
    }

    /// Build all instances for one category, in the order the user listed
    /// them. An empty selection yields no instances.
    pub fn build(
        &self,
        category: &str,
        selected: Vec<(PluginDescriptor, Vec<String>)>,
        globals: &GlobalOptions,
    ) -> Result<Vec<ToolInstance>> {
        let info = self.registry.category(category)?;
        if selected.is_empty() {
            return Ok(Vec::new());
        }
        if info.is_mergeable() {
            Ok(vec![self.build_merged(info, selected, globals)?])
        } else {
            selected
                .into_iter()
                .map(|(descriptor, tokens)| Self::build_one(info, descriptor, &tokens, globals))
                .collect()
        }
    }

    fn build_one(
        info: &CategoryInfo,
        descriptor: PluginDescriptor,
        tokens: &[String],
        globals: &GlobalOptions,
    ) -> Result<ToolInstance> {
        let label = format!("{} {}", info.name(), descriptor.name());

        let mut resolver = ArgumentResolver::new(&label, descriptor.args());
        let global_names = info
            .global_args()
            .iter()
            .chain(descriptor.global_args())
            .map(String::as_str);
        resolver.apply_globals(global_names, globals)?;
        resolver.apply_tokens(tokens)?;
        let options = resolver.finish()?;

        Ok(ToolInstance::new(
            info.name(),
            descriptor.name(),
            options,
            vec![descriptor.behavior().clone()],
        ))
    }

    fn build_merged(
        &self,
        info: &CategoryInfo,
        selected: Vec<(PluginDescriptor, Vec<String>)>,
        globals: &GlobalOptions,
    ) -> Result<ToolInstance> {
        let category = info.name();

        let fundamentals: Vec<&str> = selected
            .iter()
            .filter(|(descriptor, _)| descriptor.is_fundamental())
            .map(|(descriptor, _)| descriptor.name())
            .collect();
        if fundamentals.is_empty() {
            return Err(ConfigurationError::MissingFundamental {
                category: category.to_string(),
                available: self.registry.fundamentals(category).join(", "),
            }
            .into());
        }
        if fundamentals.len() > 1 {
            return Err(ConfigurationError::ConflictingFundamentals {
                category: category.to_string(),
                names: fundamentals.join(", "),
            }
            .into());
        }

        // Merged argument table: a later constituent redeclaring a name
        // replaces the earlier spec in place, keeping its position.
        let mut merged: Vec<ArgSpec> = Vec::new();
        for (descriptor, _) in &selected {
            for spec in descriptor.args() {
                if let Some(existing) = merged.iter_mut().find(|s| s.name() == spec.name()) {
                    *existing = spec.clone();
                } else {
                    merged.push(spec.clone());
                }
            }
        }

        // Global names resolve once, over the union of all declarations.
        let mut global_names: Vec<&str> = info.global_args().iter().map(String::as_str).collect();
        for (descriptor, _) in &selected {
            for name in descriptor.global_args() {
                if !global_names.contains(&name.as_str()) {
                    global_names.push(name);
                }
            }
        }

        let name = selected
            .iter()
            .map(|(descriptor, _)| descriptor.name())
            .collect::<Vec<_>>()
            .join("+");
        let label = format!("{} {}", category, name);

        let mut resolver = ArgumentResolver::new(&label, &merged);
        resolver.apply_globals(global_names.iter().copied(), globals)?;
        for (_, tokens) in &selected {
            resolver.apply_tokens(tokens)?;
        }
        let options = resolver.finish()?;

        let behaviors = selected
            .iter()
            .map(|(descriptor, _)| descriptor.behavior().clone())
            .collect();
        Ok(ToolInstance::new(category, name, options, behaviors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tools::arg::{ArgKind, ResolvedOptions};
    use crate::tools::base::ToolBehavior;
    use crate::tools::registry::CategoryInfo;
    use std::any::Any;
    use std::sync::Arc;

    struct Noop;

    impl ToolBehavior for Noop {
        fn invoke(&self, _options: &ResolvedOptions, _target: &mut dyn Any) -> Result<()> {
            Ok(())
        }
    }

    fn layout_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register_category(CategoryInfo::new("layout", 'l', "layout classes").mergeable())
            .unwrap();
        registry
            .register(
                "layout",
                PluginDescriptor::new("base", Arc::new(Noop))
                    .fundamental()
                    .arg(ArgSpec::new("spacing", ArgKind::Float, "spacing").default(1.0)),
            )
            .unwrap();
        registry
            .register(
                "layout",
                PluginDescriptor::new("curvy", Arc::new(Noop))
                    .arg(ArgSpec::new("curvature", ArgKind::Float, "curvature").default(0.0)),
            )
            .unwrap();
        registry
    }

    fn select(
        registry: &ToolRegistry,
        category: &str,
        picks: &[(&str, &[&str])],
    ) -> Vec<(PluginDescriptor, Vec<String>)> {
        picks
            .iter()
            .map(|(name, tokens)| {
                let descriptor = registry.lookup(category, name).unwrap().clone();
                (descriptor, tokens.iter().map(|t| t.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_merge_builds_one_instance_with_union_options() {
        let registry = layout_registry();
        let composer = ToolComposer::new(&registry);
        let selected = select(
            &registry,
            "layout",
            &[("base", &["spacing=2.0"]), ("curvy", &["curvature=0.5"])],
        );

        let tools = composer
            .build("layout", selected, &GlobalOptions::new())
            .unwrap();
        assert_eq!(tools.len(), 1);
        let tool = &tools[0];
        assert_eq!(tool.name(), "base+curvy");
        assert_eq!(tool.options().get_f64("spacing"), Some(2.0));
        assert_eq!(tool.options().get_f64("curvature"), Some(0.5));
    }

    #[test]
    fn test_merge_without_fundamental() {
        let registry = layout_registry();
        let composer = ToolComposer::new(&registry);
        let selected = select(&registry, "layout", &[("curvy", &[])]);

        let err = composer
            .build("layout", selected, &GlobalOptions::new())
            .unwrap_err();
        match err {
            Error::Configuration(ConfigurationError::MissingFundamental {
                category,
                available,
            }) => {
                assert_eq!(category, "layout");
                assert_eq!(available, "base");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_merge_with_conflicting_fundamentals() {
        let mut registry = layout_registry();
        registry
            .register(
                "layout",
                PluginDescriptor::new("dual", Arc::new(Noop)).fundamental(),
            )
            .unwrap();
        let composer = ToolComposer::new(&registry);
        let selected = select(&registry, "layout", &[("base", &[]), ("dual", &[])]);

        let err = composer
            .build("layout", selected, &GlobalOptions::new())
            .unwrap_err();
        match err {
            Error::Configuration(ConfigurationError::ConflictingFundamentals {
                category,
                names,
            }) => {
                assert_eq!(category, "layout");
                assert_eq!(names, "base, dual");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_last_listed_declaration_wins() {
        let mut registry = ToolRegistry::new();
        registry
            .register_category(CategoryInfo::new("layout", 'l', "layouts").mergeable())
            .unwrap();
        registry
            .register(
                "layout",
                PluginDescriptor::new("a", Arc::new(Noop))
                    .fundamental()
                    .arg(ArgSpec::new("x", ArgKind::Int, "x").default(1)),
            )
            .unwrap();
        registry
            .register(
                "layout",
                PluginDescriptor::new("b", Arc::new(Noop))
                    .arg(ArgSpec::new("x", ArgKind::Int, "x").default(2)),
            )
            .unwrap();

        let composer = ToolComposer::new(&registry);
        let selected = select(&registry, "layout", &[("a", &[]), ("b", &[])]);
        let tools = composer
            .build("layout", selected, &GlobalOptions::new())
            .unwrap();
        assert_eq!(tools[0].options().get_i64("x"), Some(2));
    }

    #[test]
    fn test_later_constituent_tokens_override() {
        let registry = layout_registry();
        let composer = ToolComposer::new(&registry);
        // curvy is listed second and overrides the spacing set by base.
        let selected = select(
            &registry,
            "layout",
            &[("base", &["spacing=2.0"]), ("curvy", &["spacing=3.0"])],
        );
        let tools = composer
            .build("layout", selected, &GlobalOptions::new())
            .unwrap();
        assert_eq!(tools[0].options().get_f64("spacing"), Some(3.0));
    }

    #[test]
    fn test_merged_globals_resolve_once_over_union() {
        let mut registry = ToolRegistry::new();
        registry
            .register_category(
                CategoryInfo::new("layout", 'l', "layouts")
                    .mergeable()
                    .global_arg("label_size"),
            )
            .unwrap();
        registry
            .register(
                "layout",
                PluginDescriptor::new("base", Arc::new(Noop))
                    .fundamental()
                    .global_arg("units"),
            )
            .unwrap();

        let composer = ToolComposer::new(&registry);
        let selected = select(&registry, "layout", &[("base", &[])]);
        let globals = GlobalOptions::new()
            .with("label_size", 12.0)
            .with("units", "GeV");
        let tools = composer.build("layout", selected, &globals).unwrap();
        assert_eq!(tools[0].options().get_f64("label_size"), Some(12.0));
        assert_eq!(tools[0].options().get_str("units"), Some("GeV"));
    }

    #[test]
    fn test_plain_category_builds_independent_instances() {
        let mut registry = ToolRegistry::new();
        registry
            .register_category(CategoryInfo::new("style", 's', "styles"))
            .unwrap();
        registry
            .register(
                "style",
                PluginDescriptor::new("qcd", Arc::new(Noop))
                    .arg(ArgSpec::new("scheme", ArgKind::Str, "scheme").default("rgb")),
            )
            .unwrap();
        registry
            .register(
                "style",
                PluginDescriptor::new("mono", Arc::new(Noop))
                    .arg(ArgSpec::new("shade", ArgKind::Str, "shade").default("light")),
            )
            .unwrap();

        let composer = ToolComposer::new(&registry);
        let selected = select(
            &registry,
            "style",
            &[("qcd", &[]), ("mono", &["shade=dark"])],
        );
        let tools = composer
            .build("style", selected, &GlobalOptions::new())
            .unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name(), "qcd");
        assert_eq!(tools[0].options().get_str("scheme"), Some("rgb"));
        assert_eq!(tools[1].name(), "mono");
        assert_eq!(tools[1].options().get_str("shade"), Some("dark"));
    }

    #[test]
    fn test_empty_selection_builds_nothing() {
        let registry = layout_registry();
        let composer = ToolComposer::new(&registry);
        let tools = composer
            .build("layout", Vec::new(), &GlobalOptions::new())
            .unwrap();
        assert!(tools.is_empty());
    }
}
