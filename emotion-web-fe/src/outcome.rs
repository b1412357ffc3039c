//! The ways one round of analysis can fail.  None is fatal: every
//! variant ends up rendered as an inline message in the result
//! region, and `Display` is the exact text shown to the user.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input was empty or whitespace only.  Detected before any
    /// network activity.
    EmptyInput,
    /// HTTP succeeded but the body's `status` field flagged the
    /// text as unusable.  Carries the service's own message.
    Rejected(String),
    /// The exchange completed with a non-2xx HTTP status.
    Http { status: u16, status_text: String },
    /// The request never completed, or the body was not a report.
    Transport(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::EmptyInput => write!(f, "Error: Ingrese texto para analizar"),
            AnalysisError::Rejected(message) => write!(f, "{message}"),
            AnalysisError::Http {
                status,
                status_text,
            } => write!(f, "Error {status}: {status_text}"),
            AnalysisError::Transport(detail) => write!(f, "Error de conexión: {detail}"),
        }
    }
}
