//! Validated site configuration.

use docsite_nav::{
    NavItem, SearchConfig, SidebarSection, SidebarTree, SiteMetadata, normalize_path,
};
use docsite_theme::{ComposedTheme, PageContext, PageLayout};
use serde::Serialize;

use crate::builder::SiteConfigBuilder;
use crate::diagnostics::ConfigWarning;

/// Root configuration of a documentation site.
///
/// Only obtainable through [`SiteConfigBuilder::build`], so every instance
/// has passed validation. Immutable and shareable across render threads.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    nav: Vec<NavItem>,
    sidebar: SidebarTree,
    search: SearchConfig,
    metadata: SiteMetadata,
    theme: ComposedTheme,
    version: String,
    warnings: Vec<ConfigWarning>,
}

impl SiteConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> SiteConfigBuilder {
        SiteConfigBuilder::new()
    }

    pub(crate) fn from_parts(
        nav: Vec<NavItem>,
        sidebar: SidebarTree,
        search: SearchConfig,
        metadata: SiteMetadata,
        theme: ComposedTheme,
        version: String,
        warnings: Vec<ConfigWarning>,
    ) -> Self {
        Self {
            nav,
            sidebar,
            search,
            metadata,
            theme,
            version,
            warnings,
        }
    }

    /// Top navigation with computed labels resolved.
    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// All sidebar declarations.
    #[must_use]
    pub fn sidebar(&self) -> &SidebarTree {
        &self.sidebar
    }

    /// Sidebar sections for a page path (longest matching prefix).
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[SidebarSection] {
        self.sidebar.resolve(path)
    }

    /// Search configuration.
    #[must_use]
    pub fn search(&self) -> &SearchConfig {
        &self.search
    }

    /// Site metadata.
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Composed theme.
    #[must_use]
    pub fn theme(&self) -> &ComposedTheme {
        &self.theme
    }

    /// Resolved application version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Non-fatal findings from validation and theme composition.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Render context for one page.
    #[must_use]
    pub fn page<'a>(&'a self, request: &'a PageRequest) -> PageContext<'a> {
        let sidebar: &[SidebarSection] = match request.layout {
            PageLayout::Doc => self.sidebar_for(&request.path),
            PageLayout::Home => &[],
        };
        PageContext {
            path: &request.path,
            title: &request.title,
            content: &request.content,
            layout: request.layout,
            source_path: request.source_path.as_deref(),
            last_updated: request.last_updated.as_deref(),
            version: &self.version,
            nav: &self.nav,
            sidebar,
            metadata: &self.metadata,
            search: &self.search,
        }
    }

    /// Render a full page through the composed theme.
    #[must_use]
    pub fn render(&self, request: &PageRequest) -> String {
        self.theme.render(&self.page(request))
    }

    /// Navigation data for a page path, without rendering.
    #[must_use]
    pub fn chrome(&self, path: &str) -> PageChrome<'_> {
        let path = normalize_path(path).into_owned();
        PageChrome {
            title: &self.metadata.title,
            base: &self.metadata.base,
            version: &self.version,
            nav: &self.nav,
            sidebar_prefix: self.sidebar.matching_prefix(&path),
            sidebar: self.sidebar_for(&path),
            search: &self.search,
            path,
        }
    }
}

/// A page to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Page path (e.g. `/guide/installation`).
    pub path: String,
    /// Page title, empty to use the site title.
    pub title: String,
    /// Page body HTML.
    pub content: String,
    /// Layout kind.
    pub layout: PageLayout,
    /// Source file relative to the docs root.
    pub source_path: Option<String>,
    /// Last-updated timestamp, already formatted.
    pub last_updated: Option<String>,
}

impl PageRequest {
    /// Doc page at `path`.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Home page at `/`.
    #[must_use]
    pub fn home() -> Self {
        Self {
            layout: PageLayout::Home,
            ..Self::new("/")
        }
    }

    /// Set the page title shown in `<title>` and the doc header.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the page body HTML.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the source file, used for the edit link.
    #[must_use]
    pub fn source_path(mut self, source_path: impl Into<String>) -> Self {
        self.source_path = Some(source_path.into());
        self
    }

    /// Set the last-updated timestamp, shown when the site enables it.
    #[must_use]
    pub fn last_updated(mut self, last_updated: impl Into<String>) -> Self {
        self.last_updated = Some(last_updated.into());
        self
    }
}

/// Resolved navigation for one page, serializable for tooling.
#[derive(Debug, Serialize)]
pub struct PageChrome<'a> {
    /// Normalized page path.
    pub path: String,
    /// Site title.
    pub title: &'a str,
    /// Base path.
    pub base: &'a str,
    /// Resolved version.
    pub version: &'a str,
    /// Top navigation.
    pub nav: &'a [NavItem],
    /// Prefix whose sidebar was selected.
    pub sidebar_prefix: Option<&'a str>,
    /// Sidebar sections.
    pub sidebar: &'a [SidebarSection],
    /// Search configuration.
    pub search: &'a SearchConfig,
}
