//! Error taxonomy.
//!
//! - `ReportError` - caller errors raised by the renderer
//! - `ValidationError` - rejected before any side effect
//! - `RemoteError` - failures reported by an external collaborator
//! - `ConsoleError` - everything the console controller can surface
//!
//! Missing optional record fields are never errors; the renderer
//! substitutes placeholders instead.

use std::fmt;

use thiserror::Error;

/// Errors raised by the report renderer.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report kind: {0:?} (expected \"inspection\" or \"quality\")")]
    InvalidReportKind(String),

    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Caller-side validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("access denied for role {0:?}; manager access required")]
    AccessDenied(String),

    #[error("action cancelled")]
    Declined,
}

/// Which external collaborator reported a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteSystem {
    Identity,
    RecordStore,
    Functions,
}

impl fmt::Display for RemoteSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteSystem::Identity => "identity",
            RemoteSystem::RecordStore => "record_store",
            RemoteSystem::Functions => "functions",
        };
        f.write_str(name)
    }
}

/// Failure from an external collaborator; the message is shown verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    pub system: RemoteSystem,
    pub message: String,
}

impl RemoteError {
    pub fn new(system: RemoteSystem, message: impl Into<String>) -> Self {
        Self {
            system,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the admin console controller.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("not signed in")]
    NotSignedIn,

    #[error("record not found: {0}")]
    RecordNotFound(String),
}
