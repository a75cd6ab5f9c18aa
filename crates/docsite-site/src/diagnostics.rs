//! Batch configuration diagnostics.
//!
//! Validation never stops at the first problem. Every structural error is
//! collected into [`ConfigDiagnostics`] so the author sees all of them in one
//! pass; non-fatal findings are [`ConfigWarning`]s kept on the built config.

use std::fmt;

use docsite_theme::ThemeWarning;

/// One structural configuration error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Path of the offending entry (e.g. `nav[1].items`).
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// All structural errors found while building a configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Append all errors from `other`.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Recorded errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of recorded errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert to a result: `Err` if any error was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when it contains errors.
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config validation failed:")?;
        for err in &self.errors {
            write!(f, "\n  {err}")?;
        }
        if self.errors.len() > 1 {
            write!(f, "\nfound {} errors", self.errors.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

/// Non-fatal configuration finding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    /// Theme composition warning (slot collisions, unknown slots or components).
    #[error("theme: {0}")]
    Theme(#[from] ThemeWarning),
    /// Search translation key the search UI never reads.
    #[error("search.translations: unknown key '{key}'")]
    UnknownTranslation {
        /// Dotted translation key.
        key: String,
    },
}
