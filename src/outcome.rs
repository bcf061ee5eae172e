//! Non-raising result type for callers that branch instead of propagating.

use serde::Serialize;

use crate::error::TranscodeError;

/// Success or failure of a transcoding call.
///
/// A failure keeps the error's full message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    Success { value: T },
    Failure { message: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value } => Some(value),
            Self::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success { value } => Outcome::Success { value: f(value) },
            Self::Failure { message } => Outcome::Failure { message },
        }
    }
}

impl<T> From<Result<T, TranscodeError>> for Outcome<T> {
    fn from(result: Result<T, TranscodeError>) -> Self {
        match result {
            Ok(value) => Self::Success { value },
            Err(e) => Self::Failure {
                message: e.to_string(),
            },
        }
    }
}
