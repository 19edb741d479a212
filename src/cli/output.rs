use crate::SmapError;
use serde::Serialize;

/// JSON envelope printed by `--format json`
#[derive(Debug, Serialize)]
pub struct CommandOutput<T>
where
    T: Serialize,
{
    pub status: String,
    pub result: Option<T>,
    pub failure: Option<FailureInfo>,
}

/// Machine-readable description of the first failure
#[derive(Debug, Serialize)]
pub struct FailureInfo {
    pub code: String,
    pub kind: crate::ErrorKind,
    pub rule: Option<u8>,
    pub line: Option<usize>,
    pub message: String,
}

impl From<&SmapError> for FailureInfo {
    fn from(err: &SmapError) -> Self {
        let line = match err {
            SmapError::Syntax { location, .. } | SmapError::Assertion { location, .. } => {
                location.line
            }
            SmapError::Configuration { .. } => None,
        };
        Self {
            code: err.failure_code(),
            kind: err.kind(),
            rule: err.rule_number(),
            line,
            message: err.to_string(),
        }
    }
}

impl<T: Serialize> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            status: "ok".to_string(),
            result: Some(result),
            failure: None,
        }
    }

    pub fn failure(err: &SmapError) -> Self {
        Self {
            status: "error".to_string(),
            result: None,
            failure: Some(err.into()),
        }
    }
}
