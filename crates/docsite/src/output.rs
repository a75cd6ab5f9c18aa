//! Terminal output for `docsite` commands.
//!
//! Status lines (loaded config path, matched sidebar prefix, config warnings)
//! are written to stderr. Command results (nav JSON, page chrome, rendered
//! HTML) are written to stdout so they can be piped into other tools.

use console::{Style, Term};

/// Writes status lines to stderr and command results to stdout.
pub(crate) struct Output {
    status: Term,
    results: Term,
    ok: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            status: Term::stderr(),
            results: Term::stdout(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }

    /// Plain status line.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.status.write_line(msg);
    }

    /// Green status line, e.g. after a passing `check`.
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.status.write_line(&self.ok.apply_to(msg).to_string());
    }

    /// Non-fatal configuration finding, prefixed with `Warning:`.
    pub(crate) fn warning(&self, msg: &str) {
        let line = format!("Warning: {msg}");
        let _ = self.status.write_line(&self.warn.apply_to(line).to_string());
    }

    /// Fatal error, prefixed with `Error:`.
    pub(crate) fn error(&self, msg: &str) {
        let line = format!("Error: {msg}");
        let _ = self.status.write_line(&self.fail.apply_to(line).to_string());
    }

    /// Command result on stdout.
    pub(crate) fn data(&self, text: &str) -> std::io::Result<()> {
        self.results.write_line(text)
    }
}
