//! Global site metadata.
//!
//! Title, description, base path and the extra `<head>` elements emitted on
//! every page, plus footer text, social links and the "edit this page" link.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::html::escape_html;
use crate::link;

/// Base path used when none is configured.
pub const DEFAULT_BASE: &str = "/";

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["base", "link", "meta"];

/// Site-wide metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    /// Site title, used in `<title>` and the nav bar.
    pub title: String,
    /// Site description for `<meta name="description">`.
    pub description: String,
    /// Path the site is deployed under. Starts and ends with `/`.
    pub base: String,
    /// Extra `<head>` elements in emission order.
    pub head: Vec<HeadTag>,
    /// Footer text.
    pub footer: Option<Footer>,
    /// Social links shown in the nav bar.
    pub social_links: Vec<SocialLink>,
    /// "Edit this page" link.
    pub edit_link: Option<EditLink>,
    /// Show the last-updated timestamp on doc pages.
    pub last_updated: bool,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: DEFAULT_BASE.to_owned(),
            head: Vec::new(),
            footer: None,
            social_links: Vec::new(),
            edit_link: None,
            last_updated: false,
        }
    }
}

impl SiteMetadata {
    /// Create metadata with a title and defaults elsewhere.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Public URL for an internal path, honoring the base path.
    ///
    /// External URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, target: &str) -> String {
        if !target.starts_with('/') || target.starts_with("//") {
            return target.to_owned();
        }
        format!("{}{target}", self.base.trim_end_matches('/'))
    }

    /// Edit URL for a page source file, if an edit link is configured.
    #[must_use]
    pub fn edit_url(&self, source_path: &str) -> Option<String> {
        self.edit_link
            .as_ref()
            .map(|edit| edit.url_for(source_path))
    }

    /// All head tags rendered as HTML, one per line.
    #[must_use]
    pub fn head_html(&self) -> String {
        let mut html = String::new();
        for tag in &self.head {
            html.push_str(&tag.to_html());
            html.push('\n');
        }
        html
    }
}

/// Reason a head tag was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeadTagError {
    /// Tag name is empty.
    #[error("head tag name cannot be empty")]
    EmptyTagName,
    /// Tag name has characters other than ASCII letters, digits and `-`.
    #[error("head tag name {0:?} is not a valid element name")]
    InvalidTagName(String),
    /// An attribute has an empty name.
    #[error("head tag <{0}> has an attribute with an empty name")]
    EmptyAttributeName(String),
    /// Attribute name has characters other than ASCII letters, digits, `-` and `:`.
    #[error("head tag <{tag}> attribute {name:?} is not a valid attribute name")]
    InvalidAttributeName {
        /// Element name.
        tag: String,
        /// Offending attribute name.
        name: String,
    },
}

/// Element emitted into `<head>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name (`link`, `meta`, `script`).
    pub tag: String,
    /// Attributes, emitted in key order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Inner content for non-void elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Create a tag without attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: None,
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set inner content.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Check the tag and attribute names.
    ///
    /// # Errors
    ///
    /// Returns [`HeadTagError`] if a name is empty or malformed.
    pub fn check(&self) -> Result<(), HeadTagError> {
        if self.tag.is_empty() {
            return Err(HeadTagError::EmptyTagName);
        }
        if !self
            .tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(HeadTagError::InvalidTagName(self.tag.clone()));
        }
        for name in self.attrs.keys() {
            if name.is_empty() {
                return Err(HeadTagError::EmptyAttributeName(self.tag.clone()));
            }
            if !is_attribute_name(name) {
                return Err(HeadTagError::InvalidAttributeName {
                    tag: self.tag.clone(),
                    name: name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Render the element as HTML.
    ///
    /// Attributes with malformed names are left out.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in self.attrs.iter().filter(|(name, _)| is_attribute_name(name)) {
            let _ = write!(html, " {}=\"{}\"", name, escape_html(value));
        }
        html.push('>');
        if !VOID_ELEMENTS.contains(&self.tag.as_str()) {
            if let Some(content) = &self.content {
                html.push_str(content);
            }
            let _ = write!(html, "</{}>", self.tag);
        }
        html
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ':')
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Message line (may contain HTML).
    #[serde(default)]
    pub message: Option<String>,
    /// Copyright line (may contain HTML).
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Icon link to an external profile or repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name (`github`, `discord`, ...).
    pub icon: String,
    /// Absolute URL.
    pub link: String,
}

impl SocialLink {
    /// Returns true if the link is an absolute external URL.
    #[must_use]
    pub fn is_external(&self) -> bool {
        link::is_external(&self.link)
    }
}

/// Placeholder replaced by the page source path in edit link patterns.
pub const EDIT_PATH_PLACEHOLDER: &str = ":path";

/// "Edit this page" link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLink {
    /// URL pattern containing `:path`.
    pub pattern: String,
    /// Link text.
    #[serde(default = "default_edit_text")]
    pub text: String,
}

fn default_edit_text() -> String {
    "Edit this page".to_owned()
}

impl EditLink {
    /// Edit URL for a page source path (relative to the docs root).
    #[must_use]
    pub fn url_for(&self, source_path: &str) -> String {
        self.pattern
            .replace(EDIT_PATH_PLACEHOLDER, source_path.trim_start_matches('/'))
    }
}
