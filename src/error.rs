//! Error types for Mediatheque

use thiserror::Error;

/// Numeric error codes, also used as the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    NotBorrowed = 22,
    IoFailure = 30,
    ParseFailure = 31,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: media with reference {0} is not in the catalog")]
    NotFound(i32),

    #[error("Unavailable: no copy of media {0} left to borrow")]
    Unavailable(i32),

    #[error("Not loaned: media {0} has no active loan")]
    NotLoaned(i32),

    #[error("Duplicate reference: media {0} is already in the catalog")]
    DuplicateReference(i32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Error code reported for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Unavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotLoaned(_) => ErrorCode::NotBorrowed,
            AppError::DuplicateReference(_) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Io(_) => ErrorCode::IoFailure,
            AppError::Parse(_) => ErrorCode::ParseFailure,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }

    /// Process exit status for this error, never zero
    pub fn exit_code(&self) -> i32 {
        self.code() as i32
    }

    /// Whether the caller can recover by retrying with different input
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Unavailable(_)
                | AppError::NotLoaned(_)
                | AppError::DuplicateReference(_)
                | AppError::Validation(_)
        )
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
