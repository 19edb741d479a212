pub mod cli;
pub mod config;
pub mod logging;
pub mod smap;
pub mod ui;
pub mod utils;
pub mod verify;

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;

pub use smap::{decode, AssertionRule, Smap};
pub use verify::{verify, InputKind, VerifyReport};

/// Result type alias for command-level code
pub type Result<T> = miette::Result<T>;

/// Result type alias for the verification core
pub type SmapResult<T> = std::result::Result<T, SmapError>;

/// Where a diagnostic points: the artifact being verified and, while a
/// parse is still in progress, the line the cursor is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub artifact: String,
    pub line: Option<usize>,
}

impl Location {
    pub fn new(artifact: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            artifact: artifact.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.artifact, line),
            None => write!(f, "{}", self.artifact),
        }
    }
}

/// Broad failure category of an [`SmapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Syntax,
    Assertion,
}

/// Error types for SMAP verification
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum SmapError {
    #[error("{artifact}: Configuration error - {message}")]
    #[diagnostic(
        code(smap::configuration),
        help("Check that the path exists, is readable, and names either an SMAP text file or a class file carrying a SourceDebugExtension attribute.")
    )]
    Configuration { artifact: String, message: String },

    #[error("{location}: Assertion #1 failed - SMAP syntax error: {message}")]
    #[diagnostic(
        code(smap::syntax),
        help("SMAP sections start with '*' followed by one of S, F, L, V, O, C or E, and the document must end with '*E'.")
    )]
    Syntax { location: Location, message: String },

    #[error("{location}: {rule}{}", detail_suffix(.detail))]
    #[diagnostic(
        code(smap::assertion),
        help("See JSR-045 for the structure each SMAP section must follow.")
    )]
    Assertion {
        location: Location,
        rule: AssertionRule,
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}

impl SmapError {
    pub fn configuration(artifact: impl Into<String>, message: impl Into<String>) -> Self {
        SmapError::Configuration {
            artifact: artifact.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SmapError::Configuration { .. } => ErrorKind::Configuration,
            SmapError::Syntax { .. } => ErrorKind::Syntax,
            SmapError::Assertion { .. } => ErrorKind::Assertion,
        }
    }

    /// The violated assertion number; syntax errors report rule 1.
    pub fn rule_number(&self) -> Option<u8> {
        match self {
            SmapError::Configuration { .. } => None,
            SmapError::Syntax { .. } => Some(smap::rules::SYNTAX_RULE),
            SmapError::Assertion { rule, .. } => Some(rule.number()),
        }
    }

    /// Stable machine-readable failure code, e.g. `smap::assertion::7`.
    pub fn failure_code(&self) -> String {
        match self {
            SmapError::Configuration { .. } => "smap::configuration".to_string(),
            SmapError::Syntax { .. } => "smap::syntax".to_string(),
            SmapError::Assertion { rule, .. } => format!("smap::assertion::{}", rule.number()),
        }
    }

    /// Process exit status used by the `smap-verify` binary.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration => 2,
            ErrorKind::Syntax => 3,
            ErrorKind::Assertion => 4,
        }
    }
}
