//! Diagnostics printed to stderr.
//!
//! A diagnostic is a headline, an optional path it is about, one note per
//! affected file, and hints on how to fix it:
//!
//! ```text
//! error: could not load 2 runtime file(s)
//!   --> runtimes
//!    | broken.json: missing required property `vendor`
//!    | garbled.json: invalid JSON: expected value at line 1 column 1
//!    = hint: Check the listed files for missing required properties
//! ```

use std::fmt::{self, Write as _};
use std::path::PathBuf;

/// Hints shared by several diagnostics.
pub mod hints {
    pub const FIX_INVENTORY: &str =
        "Check the listed files for missing required properties (`name`, `vendor`, `extensions`)";

    pub const RUN_VERBOSE: &str = "Run `openxr-inventory check --verbose` for per-file details";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }

    /// Bold ANSI colour code for the label.
    fn ansi(self) -> &'static str {
        match self {
            Severity::Error => "1;31",
            Severity::Warning => "1;33",
        }
    }
}

/// One user-facing problem report.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub headline: String,
    pub location: Option<PathBuf>,
    pub notes: Vec<String>,
    pub hints: Vec<&'static str>,
}

impl Diagnostic {
    pub fn new(severity: Severity, headline: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            headline: headline.into(),
            location: None,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn error(headline: impl Into<String>) -> Self {
        Self::new(Severity::Error, headline)
    }

    pub fn warning(headline: impl Into<String>) -> Self {
        Self::new(Severity::Warning, headline)
    }

    /// The file or directory the diagnostic is about.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// One note per item, in order; typically one per failed file.
    pub fn with_notes<I>(mut self, notes: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.notes.extend(notes.into_iter().map(|n| n.to_string()));
        self
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hints.push(hint);
        self
    }

    /// Render for the terminal, with ANSI colour if `color` is set.
    pub fn format(&self, color: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, color);
        out
    }

    fn render(&self, out: &mut String, color: bool) -> fmt::Result {
        let label = self.severity.label();
        if color {
            write!(out, "\x1b[{}m{}\x1b[0m", self.severity.ansi(), label)?;
        } else {
            out.push_str(label);
        }
        writeln!(out, ": {}", self.headline)?;

        if let Some(path) = &self.location {
            writeln!(out, "  --> {}", path.display())?;
        }
        for note in &self.notes {
            writeln!(out, "   | {}", note)?;
        }
        for hint in &self.hints {
            writeln!(out, "   = hint: {}", hint)?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
