//! Named slot bindings.
//!
//! A slot is an extension point a base layout exposes by name. A
//! [`SlotBinding`] supplies the content for one slot; a slot without a
//! binding renders nothing.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::app::App;
use crate::page::PageContext;

/// Render function of a slot binding.
pub type SlotFn = Arc<dyn Fn(&PageContext<'_>, &App) -> String + Send + Sync>;

/// Content bound to a named slot.
#[derive(Clone)]
pub struct SlotBinding {
    name: String,
    component: Option<String>,
    render: SlotFn,
}

impl SlotBinding {
    /// Bind a render function to a slot.
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&PageContext<'_>, &App) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            component: None,
            render: Arc::new(render),
        }
    }

    /// Bind fixed HTML to a slot.
    pub fn html(name: impl Into<String>, html: impl Into<String>) -> Self {
        let html = html.into();
        Self::new(name, move |_, _| html.clone())
    }

    /// Bind a registered app component to a slot.
    ///
    /// Renders nothing if the component is not registered at render time.
    pub fn component(name: impl Into<String>, component: impl Into<String>) -> Self {
        let component = component.into();
        let lookup = component.clone();
        Self {
            component: Some(component),
            ..Self::new(name, move |page, app| {
                app.render_component(&lookup, page).unwrap_or_default()
            })
        }
    }

    /// Slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Component rendered by this binding, if it was bound by component name.
    #[must_use]
    pub fn component_name(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

impl fmt::Debug for SlotBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBinding")
            .field("name", &self.name)
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

/// Slot table: at most one binding per slot name.
#[derive(Clone, Default)]
pub struct Slots {
    bindings: BTreeMap<String, SlotFn>,
}

impl Slots {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a binding, returning true if it replaced an earlier one.
    pub fn bind(&mut self, binding: SlotBinding) -> bool {
        self.bindings
            .insert(binding.name, binding.render)
            .is_some()
    }

    /// Returns true if the slot has content.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Render a slot; unbound slots render as an empty string.
    #[must_use]
    pub fn render(&self, name: &str, page: &PageContext<'_>, app: &App) -> String {
        self.bindings
            .get(name)
            .map(|render| render(page, app))
            .unwrap_or_default()
    }

    /// Bound slot names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of bound slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no slot is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Debug for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slots")
            .field("bindings", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}
