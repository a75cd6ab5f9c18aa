//! Search UI configuration.
//!
//! Only the configuration surface lives here: which provider drives the
//! search box, and the localized strings the local provider shows. The index
//! itself is built elsewhere.
//!
//! ```toml
//! [search]
//! provider = "local"
//!
//! [search.translations.button]
//! buttonText = "検索"
//!
//! [search.translations.modal.footer]
//! closeText = "閉じる"
//! ```
//!
//! Nested translation tables are flattened to dotted keys
//! (`modal.footer.closeText`). Lookups never fail: a missing key falls back to
//! the built-in English default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

/// Built-in UI strings of the local search box.
const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    ("button.buttonText", "Search"),
    ("button.buttonAriaLabel", "Search"),
    ("modal.displayDetails", "Display detailed list"),
    ("modal.resetButtonTitle", "Reset search"),
    ("modal.backButtonTitle", "Close search"),
    ("modal.noResultsText", "No results for"),
    ("modal.footer.selectText", "to select"),
    ("modal.footer.selectKeyAriaLabel", "enter"),
    ("modal.footer.navigateText", "to navigate"),
    ("modal.footer.navigateUpKeyAriaLabel", "up arrow"),
    ("modal.footer.navigateDownKeyAriaLabel", "down arrow"),
    ("modal.footer.closeText", "to close"),
    ("modal.footer.closeKeyAriaLabel", "escape"),
];

/// Built-in default for a UI string key, if the key is known.
#[must_use]
pub fn default_text(key: &str) -> Option<&'static str> {
    DEFAULT_TRANSLATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// Search provider kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchProvider {
    /// In-browser index built with the site.
    Local,
    /// Hosted search service.
    External,
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// Local search with localized UI strings.
    Local(LocalSearch),
    /// Hosted search service; localized strings are not used.
    External(ExternalSearch),
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::Local(LocalSearch::default())
    }
}

impl SearchConfig {
    /// Selected provider.
    #[must_use]
    pub fn provider(&self) -> SearchProvider {
        match self {
            Self::Local(_) => SearchProvider::Local,
            Self::External(_) => SearchProvider::External,
        }
    }

    /// UI string for `key`.
    ///
    /// The local provider consults its table first. Unknown keys without a
    /// built-in default resolve to the key itself.
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self {
            Self::Local(local) => local.translations.text(key),
            Self::External(_) => default_text(key).unwrap_or(key),
        }
    }
}

/// Local search settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearch {
    /// Localized UI strings.
    #[serde(default)]
    pub translations: LocalizationTable,
}

/// Hosted search service settings.
///
/// Missing fields deserialize as empty and are reported by site validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalSearch {
    /// Application identifier.
    pub app_id: String,
    /// Search-only API key.
    pub api_key: String,
    /// Index to query.
    pub index_name: String,
}

/// Flat table of localized UI strings keyed by dotted path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, TranslationNode>")]
pub struct LocalizationTable {
    entries: BTreeMap<String, String>,
}

impl LocalizationTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text for a dotted key.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Text declared for a key, without fallback.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Text for a key, falling back to the built-in default, then the key.
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key)
            .or_else(|| default_text(key))
            .unwrap_or(key)
    }

    /// Declared keys with no built-in counterpart (likely typos).
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|key| default_text(key).is_none())
    }

    /// Number of declared strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no string is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LocalizationTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Nested translation table as written in configuration.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranslationNode {
    Text(String),
    Table(BTreeMap<String, TranslationNode>),
}

impl From<BTreeMap<String, TranslationNode>> for LocalizationTable {
    fn from(nodes: BTreeMap<String, TranslationNode>) -> Self {
        let mut table = Self::new();
        flatten(&mut table, "", nodes);
        table
    }
}

fn flatten(table: &mut LocalizationTable, prefix: &str, nodes: BTreeMap<String, TranslationNode>) {
    for (key, node) in nodes {
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TranslationNode::Text(text) => table.insert(path, text),
            TranslationNode::Table(children) => flatten(table, &path, children),
        }
    }
}
