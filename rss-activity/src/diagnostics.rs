use std::fmt;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

/// Which aggregation level failed to find a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticScope {
    Feed,
    Company,
}

/// Advisory message raised while computing activity.
///
/// Diagnostics never change a returned value; they only explain why a
/// value came back absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The feed could not be read or was not well-formed.
    Malformed { title: String, error: String },
    /// No timestamp could be derived for a feed or a company.
    NoDate { title: String, scope: DiagnosticScope },
}

impl Diagnostic {
    pub fn title(&self) -> &str {
        match self {
            Diagnostic::Malformed { title, .. } | Diagnostic::NoDate { title, .. } => title,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Malformed { title, error } => {
                write!(f, "There was an error processing \"{}\": {}", title, error)
            }
            Diagnostic::NoDate { title, .. } => write!(f, "No date found for \"{}\"!", title),
        }
    }
}

/// Destination for diagnostics.
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic)
    }
}

/// Logs every diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Malformed { .. } => warn!(reason = "malformed", "{}", diagnostic),
            Diagnostic::NoDate { scope, .. } => {
                warn!(reason = "no_date", scope = ?scope, "{}", diagnostic)
            }
        }
    }
}

/// Keeps diagnostics in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Rendered messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while pushing cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
