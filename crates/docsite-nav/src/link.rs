//! Link target classification.
//!
//! Every navigation and sidebar entry points at a target that is either an
//! internal site path (`/guide/getting-started`) or an absolute external URL
//! (`https://github.com/...`, `mailto:...`). Anything else is rejected.

use std::borrow::Cow;

use url::Url;

/// URL schemes accepted for external targets.
const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Kind of a well-formed link target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Path inside the documentation site (starts with `/`).
    Internal,
    /// Absolute URL outside the site.
    External,
}

/// Reason a link target was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// Target is an empty string.
    #[error("link target cannot be empty")]
    Empty,
    /// Target contains whitespace.
    #[error("link target {0:?} contains whitespace")]
    Whitespace(String),
    /// Target starts with `//` and would inherit the page scheme.
    #[error("protocol-relative target {0:?} is not allowed")]
    ProtocolRelative(String),
    /// Target is neither rooted nor absolute.
    #[error("link target {0:?} must start with '/' or be an absolute URL")]
    Relative(String),
    /// Target looks like a URL but does not parse.
    #[error("invalid URL {target:?}: {message}")]
    InvalidUrl {
        /// Offending target.
        target: String,
        /// Parser message.
        message: String,
    },
    /// Target uses a scheme other than http, https or mailto.
    #[error("unsupported URL scheme '{scheme}' in {target:?}")]
    UnsupportedScheme {
        /// Offending target.
        target: String,
        /// Parsed scheme.
        scheme: String,
    },
}

/// Classify a link target, rejecting malformed ones.
///
/// # Errors
///
/// Returns [`TargetError`] if the target is empty, contains whitespace, is
/// relative, protocol-relative, or an absolute URL with an unsupported scheme.
pub fn classify(target: &str) -> Result<LinkKind, TargetError> {
    if target.is_empty() {
        return Err(TargetError::Empty);
    }
    if target.chars().any(char::is_whitespace) {
        return Err(TargetError::Whitespace(target.to_owned()));
    }
    if target.starts_with("//") {
        return Err(TargetError::ProtocolRelative(target.to_owned()));
    }
    if target.starts_with('/') {
        return Ok(LinkKind::Internal);
    }

    match Url::parse(target) {
        Ok(url) => {
            if !EXTERNAL_SCHEMES.contains(&url.scheme()) {
                return Err(TargetError::UnsupportedScheme {
                    target: target.to_owned(),
                    scheme: url.scheme().to_owned(),
                });
            }
            if url.scheme() != "mailto" && url.host_str().is_none_or(str::is_empty) {
                return Err(TargetError::InvalidUrl {
                    target: target.to_owned(),
                    message: "missing host".to_owned(),
                });
            }
            Ok(LinkKind::External)
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Err(TargetError::Relative(target.to_owned()))
        }
        Err(e) => Err(TargetError::InvalidUrl {
            target: target.to_owned(),
            message: e.to_string(),
        }),
    }
}

/// Returns true if the target is a well-formed external URL.
#[must_use]
pub fn is_external(target: &str) -> bool {
    matches!(classify(target), Ok(LinkKind::External))
}

/// Normalize a requested page path for lookups.
///
/// Drops any query string or fragment and ensures a leading slash.
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
