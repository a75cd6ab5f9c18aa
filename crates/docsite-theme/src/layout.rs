//! Base layout interface.

use crate::app::App;
use crate::page::PageContext;
use crate::slots::Slots;

/// A layout that renders a complete page and exposes named slots.
///
/// Implementations must be pure: the output depends only on the page and the
/// render scope. Slots the layout does not place are never rendered.
pub trait BaseLayout: Send + Sync {
    /// Layout name, used in diagnostics.
    fn name(&self) -> &str;

    /// Slot names this layout places in its output.
    fn slots(&self) -> &[&'static str];

    /// Render a page.
    fn render(&self, page: &PageContext<'_>, scope: &RenderScope<'_>) -> String;

    /// Returns true if the layout exposes a slot with this name.
    fn has_slot(&self, name: &str) -> bool {
        self.slots().iter().any(|slot| *slot == name)
    }
}

/// Slot table and app extensions available while rendering one page.
#[derive(Clone, Copy, Debug)]
pub struct RenderScope<'a> {
    slots: &'a Slots,
    app: &'a App,
}

impl<'a> RenderScope<'a> {
    /// Create a scope.
    #[must_use]
    pub fn new(slots: &'a Slots, app: &'a App) -> Self {
        Self { slots, app }
    }

    /// Content of a slot (empty when unbound).
    #[must_use]
    pub fn slot(&self, name: &str, page: &PageContext<'_>) -> String {
        self.slots.render(name, page, self.app)
    }

    /// App extensions.
    #[must_use]
    pub fn app(&self) -> &'a App {
        self.app
    }
}

/// Render with no slots bound and no app extensions.
#[must_use]
pub fn render_plain(layout: &dyn BaseLayout, page: &PageContext<'_>) -> String {
    let slots = Slots::new();
    let app = App::new();
    layout.render(page, &RenderScope::new(&slots, &app))
}
