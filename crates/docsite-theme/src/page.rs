//! Per-page data handed to layouts.

use docsite_nav::{NavItem, SearchConfig, SidebarSection, SiteMetadata};

/// Page layout kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageLayout {
    /// Documentation page with sidebar.
    #[default]
    Doc,
    /// Landing page with a hero section.
    Home,
}

/// Everything a layout needs to render one page.
///
/// Borrowed from the shared site configuration; building one is cheap.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    /// Requested page path (e.g. `/guide/installation`).
    pub path: &'a str,
    /// Page title, empty to use the site title.
    pub title: &'a str,
    /// Rendered page body HTML.
    pub content: &'a str,
    /// Layout kind.
    pub layout: PageLayout,
    /// Source file path relative to the docs root, for edit links.
    pub source_path: Option<&'a str>,
    /// Last-updated timestamp, already formatted.
    pub last_updated: Option<&'a str>,
    /// Resolved site version.
    pub version: &'a str,
    /// Top navigation items.
    pub nav: &'a [NavItem],
    /// Sidebar sections resolved for `path`.
    pub sidebar: &'a [SidebarSection],
    /// Site metadata.
    pub metadata: &'a SiteMetadata,
    /// Search configuration.
    pub search: &'a SearchConfig,
}

impl PageContext<'_> {
    /// Text for the `<title>` element.
    #[must_use]
    pub fn document_title(&self) -> String {
        let site = self.metadata.title.as_str();
        if self.title.is_empty() || self.title == site {
            site.to_owned()
        } else if site.is_empty() {
            self.title.to_owned()
        } else {
            format!("{} | {site}", self.title)
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{PageContext, PageLayout};
    use docsite_nav::{
        Footer, HeadTag, NavItem, NavLink, SearchConfig, SidebarSection, SiteMetadata,
    };
    use std::sync::LazyLock;

    pub(crate) static NAV: LazyLock<Vec<NavItem>> = LazyLock::new(|| {
        vec![
            NavItem::link("Guide", "/guide/"),
            NavItem::dropdown(
                "v0.1.0",
                vec![
                    NavLink::new("Changelog", "https://example.com/CHANGELOG.md"),
                    NavLink::new("Contributing", "/contributing"),
                ],
            ),
        ]
    });

    pub(crate) static SIDEBAR: LazyLock<Vec<SidebarSection>> = LazyLock::new(|| {
        vec![
            SidebarSection::new("Getting Started")
                .leaf("Installation", "/guide/installation")
                .leaf("Quick Start", "/guide/quick-start"),
            SidebarSection::new("Advanced")
                .collapsed(true)
                .leaf("Logging", "/guide/advanced/logging"),
        ]
    });

    pub(crate) static METADATA: LazyLock<SiteMetadata> = LazyLock::new(|| SiteMetadata {
        description: "Hotkey-driven task runner".to_owned(),
        head: vec![HeadTag::new("link").attr("rel", "icon").attr("href", "/favicon.ico")],
        footer: Some(Footer {
            message: Some("Released under the MIT License.".to_owned()),
            copyright: None,
        }),
        ..SiteMetadata::new("SilentCast")
    });

    pub(crate) static SEARCH: LazyLock<SearchConfig> = LazyLock::new(SearchConfig::default);

    pub(crate) fn doc_page() -> PageContext<'static> {
        PageContext {
            path: "/guide/installation",
            title: "Installation",
            content: "<h1>Installation</h1>",
            layout: PageLayout::Doc,
            source_path: Some("guide/installation.md"),
            last_updated: None,
            version: "v0.1.0",
            nav: &NAV,
            sidebar: &SIDEBAR,
            metadata: &METADATA,
            search: &SEARCH,
        }
    }

    pub(crate) fn home_page() -> PageContext<'static> {
        PageContext {
            path: "/",
            title: "",
            content: "<p>Welcome</p>",
            layout: PageLayout::Home,
            source_path: Some("index.md"),
            sidebar: &[],
            ..doc_page()
        }
    }
}
