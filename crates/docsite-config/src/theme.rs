//! `[theme]` section: components and slot bindings declared in TOML.

use docsite_nav::escape_html;
use docsite_site::ConfigDiagnostics;
use docsite_theme::{DefaultLayout, PageContext, SlotBinding, ThemeComposer};
use serde::Deserialize;

/// Theme declarations.
///
/// ```toml
/// [[theme.components]]
/// name = "VersionDisplay"
/// html = '<span class="version">{{version}}</span>'
///
/// [[theme.slots]]
/// name = "home-hero-before"
/// component = "VersionDisplay"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// App components, registered in declaration order.
    pub components: Vec<ComponentConfig>,
    /// Slot bindings, applied in declaration order.
    pub slots: Vec<SlotConfig>,
}

/// A component rendered from an HTML template.
///
/// The template may reference `{{version}}`, `{{title}}` and `{{path}}`;
/// substituted values are HTML-escaped.
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentConfig {
    /// Name slots refer to, e.g. `VersionDisplay`.
    pub name: String,
    /// HTML template.
    pub html: String,
}

/// Content for one slot: fixed HTML or a component name.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotConfig {
    /// Slot to fill, e.g. `home-hero-before`.
    pub name: String,
    /// Fixed HTML, inserted verbatim.
    pub html: Option<String>,
    /// Name of a component declared under `[[theme.components]]`.
    pub component: Option<String>,
}

impl ThemeConfig {
    /// Build a composer over [`DefaultLayout`].
    ///
    /// Malformed entries are recorded in `diags` and skipped.
    pub fn composer(&self, diags: &mut ConfigDiagnostics) -> ThemeComposer {
        let mut components = Vec::with_capacity(self.components.len());
        for (i, component) in self.components.iter().enumerate() {
            if component.name.trim().is_empty() {
                diags.error(format!("theme.components[{i}].name"), "name cannot be empty");
                continue;
            }
            components.push(component.clone());
        }

        let mut composer = ThemeComposer::new(DefaultLayout).enhance_app(move |app| {
            for ComponentConfig { name, html } in components {
                app.component(name, move |page| render_template(&html, page));
            }
        });

        for (i, slot) in self.slots.iter().enumerate() {
            let field = format!("theme.slots[{i}]");
            if slot.name.trim().is_empty() {
                diags.error(format!("{field}.name"), "name cannot be empty");
                continue;
            }
            match (&slot.html, &slot.component) {
                (Some(html), None) => {
                    composer = composer.bind(SlotBinding::html(&slot.name, html));
                }
                (None, Some(component)) => {
                    composer = composer.bind(SlotBinding::component(&slot.name, component));
                }
                (Some(_), Some(_)) => {
                    diags.error(field, "set either html or component, not both");
                }
                (None, None) => {
                    diags.error(field, "one of html or component is required");
                }
            }
        }

        composer
    }
}

/// Substitute page values into a component template.
fn render_template(template: &str, page: &PageContext<'_>) -> String {
    let title = if page.title.is_empty() {
        page.metadata.title.as_str()
    } else {
        page.title
    };
    template
        .replace("{{version}}", &escape_html(page.version))
        .replace("{{title}}", &escape_html(title))
        .replace("{{path}}", &escape_html(page.path))
}
