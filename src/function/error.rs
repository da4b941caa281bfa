//! Error type for the HTTP trigger function

use thiserror::Error;

/// Failure while building a response
///
/// Every variant maps to a 500 response; nothing is retried.
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("{0}")]
    Internal(String),
}

impl FunctionError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Internal(_) => 500,
        }
    }
}

impl From<std::fmt::Error> for FunctionError {
    fn from(_: std::fmt::Error) -> Self {
        Self::internal("failed to format timestamp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_displays_message_only() {
        let err = FunctionError::internal("clock unavailable");
        assert_eq!(err.to_string(), "clock unavailable");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_fmt_error_converts_to_internal() {
        let err: FunctionError = std::fmt::Error.into();
        assert!(matches!(err, FunctionError::Internal(_)));
    }
}
