//! Sidebar tree and path-prefix resolution.
//!
//! A [`SidebarTree`] maps path prefixes (`/guide/`, `/api/`) to the ordered
//! sections shown on pages under that prefix. Lookups select the longest
//! matching prefix, the same discipline as longest-prefix routing:
//!
//! ```
//! use docsite_nav::{SidebarSection, SidebarTree};
//!
//! let mut tree = SidebarTree::new();
//! tree.insert("/guide/", vec![SidebarSection::new("Basics").leaf("Install", "/guide/install")]);
//! tree.insert("/guide/advanced/", vec![SidebarSection::new("Advanced")]);
//!
//! assert_eq!(tree.resolve("/guide/advanced/logging")[0].title, "Advanced");
//! assert_eq!(tree.resolve("/guide/install")[0].title, "Basics");
//! assert!(tree.resolve("/api/").is_empty());
//! ```
//!
//! A prefix matches every normalized path that starts with it as a string:
//! `/guide` matches `/guidelines`, while `/api/` does not match `/api`.
//!
//! Sections and leaves keep their declared order; it is reading order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::link::normalize_path;

/// Leaf link inside a sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLeaf {
    /// Display label.
    pub label: String,
    /// Link target path.
    #[serde(rename = "link", alias = "target")]
    pub target: String,
}

impl SidebarLeaf {
    /// Create a leaf.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Collapsible group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Section heading.
    pub title: String,
    /// Initial UI state; readers may still expand the section.
    #[serde(default)]
    pub collapsed: bool,
    /// Links in reading order.
    #[serde(default)]
    pub items: Vec<SidebarLeaf>,
}

impl SidebarSection {
    /// Create an expanded section with no links.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            collapsed: false,
            items: Vec::new(),
        }
    }

    /// Set the initial collapsed state.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Append a link.
    #[must_use]
    pub fn leaf(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.items.push(SidebarLeaf::new(label, target));
        self
    }
}

/// Reason a sidebar prefix was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PrefixError {
    /// Prefix does not start with `/`.
    #[error("sidebar prefix {0:?} must start with '/'")]
    MissingLeadingSlash(String),
    /// Prefix contains whitespace.
    #[error("sidebar prefix {0:?} contains whitespace")]
    Whitespace(String),
    /// Prefix contains a query or fragment marker.
    #[error("sidebar prefix {0:?} cannot contain '?' or '#'")]
    QueryOrFragment(String),
    /// Prefix contains an empty segment.
    #[error("sidebar prefix {0:?} contains an empty path segment")]
    EmptySegment(String),
}

/// Check that a string is usable as a sidebar prefix.
///
/// # Errors
///
/// Returns [`PrefixError`] describing the first problem found.
pub fn validate_prefix(prefix: &str) -> Result<(), PrefixError> {
    if !prefix.starts_with('/') {
        return Err(PrefixError::MissingLeadingSlash(prefix.to_owned()));
    }
    if prefix.chars().any(char::is_whitespace) {
        return Err(PrefixError::Whitespace(prefix.to_owned()));
    }
    if prefix.contains(['?', '#']) {
        return Err(PrefixError::QueryOrFragment(prefix.to_owned()));
    }
    if prefix.contains("//") {
        return Err(PrefixError::EmptySegment(prefix.to_owned()));
    }
    Ok(())
}

/// Mapping from path prefix to sidebar sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarTree {
    entries: BTreeMap<String, Vec<SidebarSection>>,
}

impl SidebarTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sections for a prefix, returning the previous ones if any.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        sections: Vec<SidebarSection>,
    ) -> Option<Vec<SidebarSection>> {
        self.entries.insert(prefix.into(), sections)
    }

    /// Sections declared for an exact prefix.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[SidebarSection]> {
        self.entries.get(prefix).map(Vec::as_slice)
    }

    /// Declared prefixes.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Declared prefixes with their sections.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarSection])> {
        self.entries
            .iter()
            .map(|(prefix, sections)| (prefix.as_str(), sections.as_slice()))
    }

    /// Number of declared prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no prefix is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The longest declared prefix matching `path`.
    #[must_use]
    pub fn matching_prefix(&self, path: &str) -> Option<&str> {
        let path = normalize_path(path);
        self.entries
            .keys()
            .filter(|prefix| path.starts_with(prefix.as_str()))
            .max_by_key(|prefix| prefix.len())
            .map(String::as_str)
    }

    /// Sections to display for the page at `path`.
    ///
    /// Returns an empty slice when no prefix matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &[SidebarSection] {
        self.matching_prefix(path)
            .and_then(|prefix| self.get(prefix))
            .unwrap_or_default()
    }
}

impl FromIterator<(String, Vec<SidebarSection>)> for SidebarTree {
    fn from_iter<I: IntoIterator<Item = (String, Vec<SidebarSection>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn guide_tree() -> SidebarTree {
        let mut tree = SidebarTree::new();
        tree.insert(
            "/guide/",
            vec![
                SidebarSection::new("Getting Started")
                    .leaf("Installation", "/guide/installation")
                    .leaf("Quick Start", "/guide/quick-start"),
            ],
        );
        tree.insert(
            "/guide/advanced/",
            vec![
                SidebarSection::new("Advanced")
                    .collapsed(true)
                    .leaf("Logging", "/guide/advanced/logging"),
            ],
        );
        tree
    }

    #[test]
    fn test_resolve_longest_prefix_wins() {
        let tree = guide_tree();

        let sections = tree.resolve("/guide/advanced/logging");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Advanced");
    }

    #[test]
    fn test_resolve_shorter_prefix_for_other_pages() {
        let tree = guide_tree();

        let sections = tree.resolve("/guide/installation");

        assert_eq!(sections[0].title, "Getting Started");
    }

    #[test]
    fn test_resolve_no_match_returns_empty() {
        let tree = guide_tree();
        assert!(tree.resolve("/api/").is_empty());
        assert!(tree.resolve("/").is_empty());
        assert_eq!(tree.matching_prefix("/api/"), None);
    }

    #[test]
    fn test_resolve_empty_tree() {
        assert!(SidebarTree::new().resolve("/guide/").is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let tree = guide_tree();
        let first = tree.resolve("/guide/advanced/logging").to_vec();
        let second = tree.resolve("/guide/advanced/logging").to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_directory_key_needs_trailing_slash() {
        let mut tree = guide_tree();
        tree.insert("/api/", vec![SidebarSection::new("API")]);

        assert_eq!(tree.matching_prefix("/api"), None);
        assert!(tree.resolve("/api").is_empty());
        assert_eq!(tree.matching_prefix("/guide/advanced"), Some("/guide/"));
        assert_eq!(tree.matching_prefix("/api/"), Some("/api/"));
    }

    #[test]
    fn test_resolve_matches_plain_string_prefix() {
        let mut tree = SidebarTree::new();
        tree.insert("/guide", vec![SidebarSection::new("Guide")]);

        assert_eq!(tree.matching_prefix("/guide"), Some("/guide"));
        assert_eq!(tree.matching_prefix("/guide/intro"), Some("/guide"));
        assert_eq!(tree.matching_prefix("/guidelines"), Some("/guide"));
        assert_eq!(tree.matching_prefix("/gui"), None);
    }

    #[test]
    fn test_resolve_root_prefix_is_fallback() {
        let mut tree = guide_tree();
        tree.insert("/", vec![SidebarSection::new("Home")]);

        assert_eq!(tree.resolve("/about")[0].title, "Home");
        assert_eq!(tree.resolve("/guide/installation")[0].title, "Getting Started");
    }

    #[test]
    fn test_resolve_normalizes_requested_path() {
        let tree = guide_tree();
        assert_eq!(tree.matching_prefix("guide/advanced/logging"), Some("/guide/advanced/"));
        assert_eq!(tree.matching_prefix("/guide/advanced/x#anchor"), Some("/guide/advanced/"));
    }

    #[test]
    fn test_resolve_keeps_declared_order() {
        let mut tree = SidebarTree::new();
        tree.insert(
            "/config/",
            vec![
                SidebarSection::new("Zeta").leaf("Z", "/config/z").leaf("A", "/config/a"),
                SidebarSection::new("Alpha"),
            ],
        );

        let sections = tree.resolve("/config/a");
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        let labels: Vec<_> = sections[0].items.iter().map(|l| l.label.as_str()).collect();

        assert_eq!(titles, vec!["Zeta", "Alpha"]);
        assert_eq!(labels, vec!["Z", "A"]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut tree = SidebarTree::new();
        assert!(tree.insert("/api/", vec![]).is_none());
        assert!(tree.insert("/api/", vec![SidebarSection::new("API")]).is_some());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_section_builder_defaults() {
        let section = SidebarSection::new("Basics");
        assert!(!section.collapsed);
        assert!(section.items.is_empty());
    }

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("/").is_ok());
        assert!(validate_prefix("/guide/").is_ok());
        assert!(validate_prefix("/changelog").is_ok());
        assert!(matches!(
            validate_prefix("guide/"),
            Err(PrefixError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            validate_prefix("/my guide/"),
            Err(PrefixError::Whitespace(_))
        ));
        assert!(matches!(
            validate_prefix("/guide/?x"),
            Err(PrefixError::QueryOrFragment(_))
        ));
        assert!(matches!(
            validate_prefix("/guide//x/"),
            Err(PrefixError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_deserialize_from_toml_table() {
        let toml = r#"
[[sidebar."/guide/"]]
title = "Introduction"
items = [
    { label = "What is SilentCast?", link = "/guide/" },
    { label = "Installation", link = "/guide/installation" },
]

[[sidebar."/guide/"]]
title = "Configuration"
collapsed = true
items = [{ label = "Hotkeys", link = "/guide/hotkeys" }]
"#;
        #[derive(Deserialize)]
        struct Doc {
            sidebar: SidebarTree,
        }
        let doc: Doc = toml::from_str(toml).unwrap();

        let sections = doc.sidebar.resolve("/guide/hotkeys");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].items[1], SidebarLeaf::new("Installation", "/guide/installation"));
        assert!(sections[1].collapsed);
    }
}
