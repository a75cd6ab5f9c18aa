//! Site configuration for docsite.
//!
//! [`SiteConfig`] aggregates navigation, sidebar, search, metadata and theme.
//! It is built once through [`SiteConfigBuilder`], which validates the whole
//! declaration and reports every error in a single [`ConfigDiagnostics`]:
//!
//! ```
//! use docsite_nav::{Label, NavItem, NavLink, SidebarSection, SiteMetadata};
//! use docsite_site::{PageRequest, SiteConfig};
//!
//! let site = SiteConfig::builder()
//!     .metadata(SiteMetadata::new("SilentCast"))
//!     .nav(NavItem::link("Guide", "/guide/"))
//!     .nav(NavItem::dropdown(
//!         Label::Version,
//!         vec![NavLink::new("Contributing", "/contributing")],
//!     ))
//!     .sidebar(
//!         "/guide/",
//!         vec![SidebarSection::new("Getting Started").leaf("Installation", "/guide/installation")],
//!     )
//!     .version(Some("v0.1.0".to_owned()))
//!     .build()?;
//!
//! assert_eq!(site.nav()[1].label().text(), "v0.1.0");
//! assert_eq!(site.sidebar_for("/guide/installation")[0].title, "Getting Started");
//! assert!(site.render(&PageRequest::new("/guide/installation")).contains("Installation"));
//! # Ok::<(), docsite_site::ConfigDiagnostics>(())
//! ```

mod builder;
mod diagnostics;
mod site;
mod validate;

pub use builder::SiteConfigBuilder;
pub use diagnostics::{ConfigDiagnostics, ConfigWarning, Diagnostic};
pub use site::{PageChrome, PageRequest, SiteConfig};
