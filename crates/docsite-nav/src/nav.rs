//! Top navigation bar model.
//!
//! The nav bar is a flat, ordered list of [`NavItem`]s. Each item is either a
//! single link or a labeled dropdown of links. The declared order is the
//! rendered order: nothing here sorts or deduplicates.
//!
//! Labels may be computed. A [`Label::Version`] is a placeholder resolved at
//! build time to the version string injected by the environment, via
//! [`resolve_labels`].
//!
//! # Example
//!
//! ```
//! use docsite_nav::{Label, NavItem, NavLink, resolve_labels};
//!
//! let nav = vec![
//!     NavItem::link("Guide", "/guide/"),
//!     NavItem::dropdown(
//!         Label::Version,
//!         vec![NavLink::new("Changelog", "https://example.com/CHANGELOG.md")],
//!     ),
//! ];
//!
//! let resolved = resolve_labels(nav, Some("v1.2.0"));
//! assert_eq!(resolved[1].label().text(), "v1.2.0");
//! ```

use serde::{Deserialize, Serialize};

use crate::link::{self, normalize_path};

/// Label shown for a computed version entry when no version is injected.
pub const VERSION_PLACEHOLDER: &str = "dev";

/// Display label of a nav entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LabelRepr", into = "LabelRepr")]
pub enum Label {
    /// Literal text.
    Text(String),
    /// Version string resolved at build time.
    Version,
}

impl Label {
    /// Text to display.
    ///
    /// An unresolved [`Label::Version`] displays as [`VERSION_PLACEHOLDER`].
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Version => VERSION_PLACEHOLDER,
        }
    }

    /// Returns true if the label is computed rather than literal.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Version)
    }

    /// Replace a computed label with its resolved text.
    #[must_use]
    pub fn resolve(self, version: Option<&str>) -> Self {
        match self {
            Self::Version => Self::Text(version.unwrap_or(VERSION_PLACEHOLDER).to_owned()),
            text @ Self::Text(_) => text,
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Serialized form: a plain string, or `{ computed = "version" }`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Text(String),
    Computed { computed: ComputedLabel },
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ComputedLabel {
    Version,
}

impl From<LabelRepr> for Label {
    fn from(repr: LabelRepr) -> Self {
        match repr {
            LabelRepr::Text(text) => Self::Text(text),
            LabelRepr::Computed {
                computed: ComputedLabel::Version,
            } => Self::Version,
        }
    }
}

impl From<Label> for LabelRepr {
    fn from(label: Label) -> Self {
        match label {
            Label::Text(text) => Self::Text(text),
            Label::Version => Self::Computed {
                computed: ComputedLabel::Version,
            },
        }
    }
}

/// A single navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display label.
    pub label: Label,
    /// Internal path or absolute URL.
    #[serde(rename = "link", alias = "target")]
    pub target: String,
}

impl NavLink {
    /// Create a link.
    pub fn new(label: impl Into<Label>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Returns true if the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        link::is_external(&self.target)
    }

    /// Returns true if the page at `path` belongs to this link.
    ///
    /// Directory targets (ending in `/`) are active for every page below them;
    /// other targets only for the exact page. External links are never active.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if !self.target.starts_with('/') || self.target.starts_with("//") {
            return false;
        }
        let target = normalize_path(&self.target);
        let path = normalize_path(path);
        if target.ends_with('/') {
            path.starts_with(target.as_ref()) || path == target.trim_end_matches('/')
        } else {
            path == target
        }
    }
}

/// Dropdown menu in the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDropdown {
    /// Display label of the menu button.
    pub label: Label,
    /// Menu entries in declaration order. Must not be empty.
    pub items: Vec<NavLink>,
}

/// Top navigation bar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Labeled dropdown of links.
    Dropdown(NavDropdown),
    /// Simple link.
    Link(NavLink),
}

impl NavItem {
    /// Create a link item.
    pub fn link(label: impl Into<Label>, target: impl Into<String>) -> Self {
        Self::Link(NavLink::new(label, target))
    }

    /// Create a dropdown item.
    pub fn dropdown(label: impl Into<Label>, items: Vec<NavLink>) -> Self {
        Self::Dropdown(NavDropdown {
            label: label.into(),
            items,
        })
    }

    /// Label of the item (the menu button for dropdowns).
    #[must_use]
    pub fn label(&self) -> &Label {
        match self {
            Self::Link(link) => &link.label,
            Self::Dropdown(dropdown) => &dropdown.label,
        }
    }

    /// Links reachable from this item, in declaration order.
    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Link(link) => std::slice::from_ref(link),
            Self::Dropdown(dropdown) => &dropdown.items,
        }
    }

    /// Returns true if the page at `path` belongs to this item.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.links().iter().any(|link| link.is_active(path))
    }

    /// Resolve computed labels on the item and its children.
    #[must_use]
    pub fn resolve_labels(self, version: Option<&str>) -> Self {
        match self {
            Self::Link(link) => Self::Link(NavLink {
                label: link.label.resolve(version),
                target: link.target,
            }),
            Self::Dropdown(dropdown) => Self::Dropdown(NavDropdown {
                label: dropdown.label.resolve(version),
                items: dropdown
                    .items
                    .into_iter()
                    .map(|link| NavLink {
                        label: link.label.resolve(version),
                        target: link.target,
                    })
                    .collect(),
            }),
        }
    }
}

/// Resolve computed labels across a nav list.
///
/// Order and variants are preserved; only [`Label::Version`] changes, to the
/// given version or [`VERSION_PLACEHOLDER`].
#[must_use]
pub fn resolve_labels(items: Vec<NavItem>, version: Option<&str>) -> Vec<NavItem> {
    items
        .into_iter()
        .map(|item| item.resolve_labels(version))
        .collect()
}
