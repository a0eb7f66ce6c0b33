//! Behavior contract and runtime tool instances

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::tools::arg::ResolvedOptions;

/// Runtime behavior of a tool plugin.
///
/// The target is the collaborator-owned object a category operates on: the
/// graph view for transforms, the layout for styles and painters, the raw
/// command settings for optionsets. This crate only routes to it; the concrete
/// types live in the pipeline crates and are recovered by downcast.
pub trait ToolBehavior: Send + Sync {
    fn invoke(&self, options: &ResolvedOptions, target: &mut dyn Any) -> Result<()>;
}

/// A ready-to-use tool: validated options plus the behaviors to dispatch.
///
/// For a composed tool of a mergeable category the behavior list holds every
/// constituent in the order the user listed them; [`ToolInstance::invoke`]
/// runs them in that order, so later constituents see the effects of earlier
/// ones. Instances live for one pipeline run and are then discarded.
pub struct ToolInstance {
    category: String,
    name: String,
    options: ResolvedOptions,
    behaviors: Vec<Arc<dyn ToolBehavior>>,
}

impl ToolInstance {
    pub(crate) fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        options: ResolvedOptions,
        behaviors: Vec<Arc<dyn ToolBehavior>>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            options,
            behaviors,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Plugin name; constituents joined with `+` for composed tools.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Invoke every behavior against the target, in listed order.
    pub fn invoke(&self, target: &mut dyn Any) -> Result<()> {
        for behavior in &self.behaviors {
            behavior.invoke(&self.options, target)?;
        }
        Ok(())
    }
}

impl fmt::Display for ToolInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.name)
    }
}

impl fmt::Debug for ToolInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolInstance")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
