//! Theme composition.
//!
//! A [`ThemeComposer`] derives a theme from a base layout without modifying
//! it. Slot bindings add content at the extension points the base exposes,
//! and enhance steps register app-wide components. The result is a
//! [`ComposedTheme`]: one layout function the renderer calls per page.
//!
//! ```
//! use docsite_theme::{DefaultLayout, SlotBinding, ThemeComposer};
//!
//! let composition = ThemeComposer::new(DefaultLayout)
//!     .enhance_app(|app| {
//!         app.component("VersionDisplay", |page| page.version.to_owned());
//!     })
//!     .bind(SlotBinding::component("home-hero-before", "VersionDisplay"))
//!     .compose();
//!
//! assert!(composition.warnings.is_empty());
//! assert!(composition.theme.slots().is_bound("home-hero-before"));
//! ```
//!
//! Binding the same slot twice keeps the later binding and records a
//! [`ThemeWarning::SlotCollision`].

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::app::App;
use crate::default_layout::DefaultLayout;
use crate::layout::{BaseLayout, RenderScope};
use crate::page::PageContext;
use crate::slots::{SlotBinding, Slots};

/// Enhance step run once against the app registry.
type EnhanceFn = Box<dyn FnOnce(&mut App)>;

/// Non-fatal problem found while composing a theme.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeWarning {
    /// The same slot was bound more than once; the last binding wins.
    #[error("slot '{slot}' is bound {count} times; the last binding wins")]
    SlotCollision {
        /// Slot name.
        slot: String,
        /// Total number of bindings declared for the slot.
        count: usize,
    },
    /// The base layout does not place this slot, so its content never renders.
    #[error("layout '{layout}' has no slot named '{slot}'")]
    UnknownSlot {
        /// Slot name.
        slot: String,
        /// Base layout name.
        layout: String,
    },
    /// A slot renders a component that no enhance step registered.
    #[error("slot '{slot}' renders unregistered component '{component}'")]
    UnknownComponent {
        /// Slot name.
        slot: String,
        /// Component name.
        component: String,
    },
}

/// Builder for a derived theme.
pub struct ThemeComposer {
    base: Arc<dyn BaseLayout>,
    bindings: Vec<SlotBinding>,
    enhancers: Vec<EnhanceFn>,
}

impl ThemeComposer {
    /// Start a theme that extends `base`.
    pub fn new(base: impl BaseLayout + 'static) -> Self {
        Self::extend(Arc::new(base))
    }

    /// Start a theme that extends a shared base layout.
    #[must_use]
    pub fn extend(base: Arc<dyn BaseLayout>) -> Self {
        Self {
            base,
            bindings: Vec::new(),
            enhancers: Vec::new(),
        }
    }

    /// Add a slot binding.
    #[must_use]
    pub fn bind(mut self, binding: SlotBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Bind a render function to a slot.
    #[must_use]
    pub fn slot<F>(self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&PageContext<'_>, &App) -> String + Send + Sync + 'static,
    {
        self.bind(SlotBinding::new(name, render))
    }

    /// Add an enhance step. Steps run in declaration order.
    #[must_use]
    pub fn enhance_app(mut self, enhance: impl FnOnce(&mut App) + 'static) -> Self {
        self.enhancers.push(Box::new(enhance));
        self
    }

    /// Number of slot bindings declared so far.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Build the composed theme.
    ///
    /// Never fails: collisions and dangling names are reported as warnings.
    #[must_use]
    pub fn compose(self) -> Composition {
        let mut app = App::new();
        for enhance in self.enhancers {
            enhance(&mut app);
        }

        let mut warnings = Vec::new();
        let mut slots = Slots::new();
        let mut collisions: Vec<(String, usize)> = Vec::new();

        for binding in self.bindings {
            if !self.base.has_slot(binding.name()) {
                warnings.push(ThemeWarning::UnknownSlot {
                    slot: binding.name().to_owned(),
                    layout: self.base.name().to_owned(),
                });
            }
            if let Some(component) = binding.component_name()
                && !app.has_component(component)
            {
                warnings.push(ThemeWarning::UnknownComponent {
                    slot: binding.name().to_owned(),
                    component: component.to_owned(),
                });
            }

            let name = binding.name().to_owned();
            if slots.bind(binding) {
                match collisions.iter_mut().find(|(slot, _)| *slot == name) {
                    Some((_, count)) => *count += 1,
                    None => collisions.push((name, 2)),
                }
            }
        }

        warnings.extend(
            collisions
                .into_iter()
                .map(|(slot, count)| ThemeWarning::SlotCollision { slot, count }),
        );

        debug!(
            layout = self.base.name(),
            slots = slots.len(),
            warnings = warnings.len(),
            "Composed theme"
        );

        Composition {
            theme: ComposedTheme {
                base: self.base,
                slots,
                app,
            },
            warnings,
        }
    }
}

impl fmt::Debug for ThemeComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeComposer")
            .field("base", &self.base.name())
            .field("bindings", &self.bindings)
            .field("enhancers", &self.enhancers.len())
            .finish()
    }
}

impl Default for ThemeComposer {
    fn default() -> Self {
        Self::new(DefaultLayout)
    }
}

/// Result of [`ThemeComposer::compose`].
#[derive(Debug)]
pub struct Composition {
    /// The composed theme.
    pub theme: ComposedTheme,
    /// Problems worth reporting to the configuration author.
    pub warnings: Vec<ThemeWarning>,
}

/// A base layout combined with slot bindings and app extensions.
#[derive(Clone)]
pub struct ComposedTheme {
    base: Arc<dyn BaseLayout>,
    slots: Slots,
    app: App,
}

impl ComposedTheme {
    /// Render a page through the base layout with this theme's slots.
    #[must_use]
    pub fn render(&self, page: &PageContext<'_>) -> String {
        self.base.render(page, &RenderScope::new(&self.slots, &self.app))
    }

    /// The unmodified base layout.
    #[must_use]
    pub fn base(&self) -> &dyn BaseLayout {
        self.base.as_ref()
    }

    /// Bound slots.
    #[must_use]
    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    /// App extensions.
    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Default for ComposedTheme {
    fn default() -> Self {
        ThemeComposer::default().compose().theme
    }
}

impl fmt::Debug for ComposedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedTheme")
            .field("base", &self.base.name())
            .field("slots", &self.slots)
            .field("app", &self.app)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_layout::{SLOT_DOC_AFTER, SLOT_DOC_BEFORE, SLOT_HOME_HERO_BEFORE};
    use crate::layout::render_plain;
    use crate::page::fixtures::{doc_page, home_page};
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(ComposedTheme: Send, Sync);

    /// Minimal layout exposing one slot.
    struct Frame;

    impl BaseLayout for Frame {
        fn name(&self) -> &str {
            "frame"
        }

        fn slots(&self) -> &[&'static str] {
            &["top"]
        }

        fn render(&self, page: &PageContext<'_>, scope: &RenderScope<'_>) -> String {
            format!("[{}]{}", scope.slot("top", page), page.content)
        }
    }

    #[test]
    fn test_zero_bindings_matches_base() {
        let composition = ThemeComposer::new(DefaultLayout).compose();

        assert!(composition.warnings.is_empty());
        assert_eq!(
            composition.theme.render(&doc_page()),
            render_plain(&DefaultLayout, &doc_page())
        );
        assert_eq!(
            composition.theme.render(&home_page()),
            render_plain(&DefaultLayout, &home_page())
        );
    }

    #[test]
    fn test_binding_adds_content_without_changing_base() {
        let base = render_plain(&DefaultLayout, &doc_page());
        let composition = ThemeComposer::new(DefaultLayout)
            .bind(SlotBinding::html(SLOT_DOC_BEFORE, "<div class=\"notice\">beta</div>"))
            .compose();

        let html = composition.theme.render(&doc_page());

        assert!(html.contains("<main class=\"doc\">\n<div class=\"notice\">beta</div>"));
        assert_eq!(html.replace("<div class=\"notice\">beta</div>", ""), base);
    }

    #[test]
    fn test_duplicate_slot_last_wins_with_warning() {
        let composition = ThemeComposer::new(Frame)
            .bind(SlotBinding::html("top", "first"))
            .bind(SlotBinding::html("top", "second"))
            .compose();

        assert_eq!(composition.theme.render(&doc_page()), "[second]<h1>Installation</h1>");
        assert_eq!(
            composition.warnings,
            vec![ThemeWarning::SlotCollision {
                slot: "top".to_owned(),
                count: 2,
            }]
        );
    }

    #[test]
    fn test_triple_binding_counts() {
        let composition = ThemeComposer::new(Frame)
            .bind(SlotBinding::html("top", "a"))
            .bind(SlotBinding::html("top", "b"))
            .bind(SlotBinding::html("top", "c"))
            .compose();

        assert_eq!(composition.theme.render(&doc_page()), "[c]<h1>Installation</h1>");
        assert_eq!(composition.warnings.len(), 1);
        assert!(composition.warnings[0].to_string().contains("3 times"));
    }

    #[test]
    fn test_unknown_slot_warns() {
        let composition = ThemeComposer::new(Frame)
            .bind(SlotBinding::html("bottom", "x"))
            .compose();

        assert_eq!(
            composition.warnings,
            vec![ThemeWarning::UnknownSlot {
                slot: "bottom".to_owned(),
                layout: "frame".to_owned(),
            }]
        );
        assert_eq!(composition.theme.render(&doc_page()), "[]<h1>Installation</h1>");
    }

    #[test]
    fn test_enhance_app_registers_components() {
        let composition = ThemeComposer::new(DefaultLayout)
            .enhance_app(|app| {
                app.component("VersionDisplay", |page| {
                    format!("<span class=\"version\">{}</span>", page.version)
                });
            })
            .bind(SlotBinding::component(SLOT_HOME_HERO_BEFORE, "VersionDisplay"))
            .compose();

        assert!(composition.warnings.is_empty());
        let html = composition.theme.render(&home_page());
        assert!(html.contains("<span class=\"version\">v0.1.0</span><section class=\"hero\">"));
    }

    #[test]
    fn test_unregistered_component_warns_and_renders_nothing() {
        let composition = ThemeComposer::new(DefaultLayout)
            .bind(SlotBinding::component(SLOT_HOME_HERO_BEFORE, "CustomHero"))
            .compose();

        assert_eq!(
            composition.warnings,
            vec![ThemeWarning::UnknownComponent {
                slot: SLOT_HOME_HERO_BEFORE.to_owned(),
                component: "CustomHero".to_owned(),
            }]
        );
        assert_eq!(
            composition.theme.render(&home_page()),
            render_plain(&DefaultLayout, &home_page())
        );
    }

    #[test]
    fn test_enhance_steps_run_in_order() {
        let composition = ThemeComposer::new(Frame)
            .enhance_app(|app| {
                app.component("Badge", |_| "one".to_owned());
            })
            .enhance_app(|app| {
                app.component("Badge", |_| "two".to_owned());
            })
            .bind(SlotBinding::component("top", "Badge"))
            .compose();

        assert_eq!(composition.theme.render(&doc_page()), "[two]<h1>Installation</h1>");
    }

    #[test]
    fn test_slot_function_receives_page() {
        let composition = ThemeComposer::new(DefaultLayout)
            .slot(SLOT_DOC_AFTER, |page, _| format!("<p>{}</p>", page.path))
            .compose();

        let html = composition.theme.render(&doc_page());
        assert!(html.contains("<p>/guide/installation</p>"));
    }

    #[test]
    fn test_default_composed_theme_uses_default_layout() {
        let theme = ComposedTheme::default();
        assert_eq!(theme.base().name(), "default");
        assert!(theme.slots().is_empty());
    }
}
