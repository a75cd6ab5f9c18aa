//! Site configuration builder.

use docsite_nav::{
    NavItem, SearchConfig, SidebarSection, SidebarTree, SiteMetadata, VERSION_PLACEHOLDER,
    resolve_labels,
};
use docsite_theme::{DefaultLayout, ThemeComposer};
use tracing::{debug, warn};

use crate::diagnostics::{ConfigDiagnostics, ConfigWarning};
use crate::site::SiteConfig;
use crate::validate::{validate_metadata, validate_nav, validate_search, validate_sidebar};

/// Collects site declarations and validates them as a whole.
///
/// Nothing is checked until [`build`](Self::build), which reports every
/// structural error at once.
#[derive(Default)]
pub struct SiteConfigBuilder {
    nav: Vec<NavItem>,
    sidebar: Vec<(String, Vec<SidebarSection>)>,
    search: SearchConfig,
    metadata: SiteMetadata,
    theme: Option<ThemeComposer>,
    version: Option<String>,
}

impl SiteConfigBuilder {
    /// Create a builder with default metadata, local search and the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top navigation item.
    #[must_use]
    pub fn nav(mut self, item: NavItem) -> Self {
        self.nav.push(item);
        self
    }

    /// Append several top navigation items.
    #[must_use]
    pub fn nav_items(mut self, items: impl IntoIterator<Item = NavItem>) -> Self {
        self.nav.extend(items);
        self
    }

    /// Declare sidebar sections for a path prefix.
    #[must_use]
    pub fn sidebar(mut self, prefix: impl Into<String>, sections: Vec<SidebarSection>) -> Self {
        self.sidebar.push((prefix.into(), sections));
        self
    }

    /// Declare the same sidebar sections for several prefixes.
    #[must_use]
    pub fn sidebar_shared<I, P>(mut self, prefixes: I, sections: &[SidebarSection]) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        for prefix in prefixes {
            self.sidebar.push((prefix.into(), sections.to_vec()));
        }
        self
    }

    /// Declare every entry of an existing tree.
    #[must_use]
    pub fn sidebar_tree(mut self, tree: SidebarTree) -> Self {
        for (prefix, sections) in tree.iter() {
            self.sidebar.push((prefix.to_owned(), sections.to_vec()));
        }
        self
    }

    /// Set the search configuration.
    #[must_use]
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the site metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: SiteMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the theme. Defaults to [`DefaultLayout`] with no additions.
    #[must_use]
    pub fn theme(mut self, theme: ThemeComposer) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set the application version used for computed labels.
    ///
    /// An empty version is treated as absent.
    #[must_use]
    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns every structural error found across nav, sidebar, metadata and
    /// search. Theme problems and unknown translation keys are warnings and
    /// end up in [`SiteConfig::warnings`].
    pub fn build(self) -> Result<SiteConfig, ConfigDiagnostics> {
        let mut diags = ConfigDiagnostics::new();
        validate_nav(&self.nav, &mut diags);
        validate_sidebar(&self.sidebar, &mut diags);
        validate_metadata(&self.metadata, &mut diags);
        let mut warnings = validate_search(&self.search, &mut diags);
        diags.into_result()?;

        let composition = self
            .theme
            .unwrap_or_else(|| ThemeComposer::new(DefaultLayout))
            .compose();
        warnings.extend(composition.warnings.into_iter().map(ConfigWarning::from));
        for warning in &warnings {
            warn!("{warning}");
        }

        let version = self
            .version
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| VERSION_PLACEHOLDER.to_owned());
        let nav = resolve_labels(self.nav, Some(&version));
        let sidebar: SidebarTree = self.sidebar.into_iter().collect();

        debug!(
            nav = nav.len(),
            sidebar = sidebar.len(),
            version = %version,
            warnings = warnings.len(),
            "Site configuration built"
        );

        Ok(SiteConfig::from_parts(
            nav,
            sidebar,
            self.search,
            self.metadata,
            composition.theme,
            version,
            warnings,
        ))
    }
}
