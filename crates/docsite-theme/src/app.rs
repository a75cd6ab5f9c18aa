//! App-level extensions registered while composing a theme.
//!
//! An [`App`] holds named components: render functions available to every
//! slot binding, registered once by the theme's enhance step.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::page::PageContext;

/// Render function of a registered component.
pub type ComponentFn = Arc<dyn Fn(&PageContext<'_>) -> String + Send + Sync>;

/// Registry of globally available components.
#[derive(Clone, Default)]
pub struct App {
    components: BTreeMap<String, ComponentFn>,
}

impl App {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component, replacing any previous one with the same name.
    ///
    /// Returns true if a component was replaced.
    pub fn component<F>(&mut self, name: impl Into<String>, render: F) -> bool
    where
        F: Fn(&PageContext<'_>) -> String + Send + Sync + 'static,
    {
        self.components
            .insert(name.into(), Arc::new(render))
            .is_some()
    }

    /// Returns true if a component is registered under `name`.
    #[must_use]
    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Render a component, or `None` if it is not registered.
    #[must_use]
    pub fn render_component(&self, name: &str, page: &PageContext<'_>) -> Option<String> {
        self.components.get(name).map(|render| render(page))
    }

    /// Registered component names.
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}
