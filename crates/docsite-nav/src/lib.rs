//! Navigation model for docsite.
//!
//! This crate provides the declarative pieces a site generator reads to
//! render page chrome:
//! - [`NavItem`]: top navigation links and dropdowns, with late-bound labels
//! - [`SidebarTree`]: sidebar sections keyed by path prefix, resolved by
//!   longest-prefix-match
//! - [`SearchConfig`]: search provider and localized UI strings
//! - [`SiteMetadata`]: title, base path, `<head>` tags, footer and links
//!
//! Everything here is plain data. Validation across the whole configuration
//! happens when a `SiteConfig` is built.

pub mod html;
pub mod link;
pub mod metadata;
pub mod nav;
pub mod search;
pub mod sidebar;

pub use html::escape_html;
pub use link::{LinkKind, TargetError, classify, normalize_path};
pub use metadata::{
    DEFAULT_BASE, EDIT_PATH_PLACEHOLDER, EditLink, Footer, HeadTag, HeadTagError, SiteMetadata,
    SocialLink,
};
pub use nav::{Label, NavDropdown, NavItem, NavLink, VERSION_PLACEHOLDER, resolve_labels};
pub use search::{
    ExternalSearch, LocalSearch, LocalizationTable, SearchConfig, SearchProvider, default_text,
};
pub use sidebar::{PrefixError, SidebarLeaf, SidebarSection, SidebarTree, validate_prefix};
