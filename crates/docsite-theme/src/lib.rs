//! Theme composition for docsite.
//!
//! A theme is a base layout plus additions:
//! - [`BaseLayout`]: renders a full page and exposes named slots
//! - [`DefaultLayout`]: the built-in layout
//! - [`SlotBinding`]: content for one slot
//! - [`App`]: components registered by enhance steps
//! - [`ThemeComposer`]: combines the above into a [`ComposedTheme`]
//!
//! Composition never mutates the base layout; the composed theme calls the
//! base render function with its own slot table.

pub mod app;
pub mod composer;
pub mod default_layout;
pub mod layout;
pub mod page;
pub mod slots;

pub use app::{App, ComponentFn};
pub use composer::{ComposedTheme, Composition, ThemeComposer, ThemeWarning};
pub use default_layout::DefaultLayout;
pub use layout::{BaseLayout, RenderScope, render_plain};
pub use page::{PageContext, PageLayout};
pub use slots::{SlotBinding, SlotFn, Slots};
