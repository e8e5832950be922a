//! Error codes for the todo API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes
//! are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear in HTTP
//! responses.

use core::fmt;

/// Centralized error codes for the todo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing, malformed, expired, or otherwise unverifiable bearer token.
    /// Deliberately the only code any token failure surfaces.
    Unauthorized,
    /// Login failed; unknown email and wrong password share this code
    InvalidCredentials,

    // Request validation
    /// General validation error
    ValidationError,
    /// Invalid email address
    InvalidEmail,
    /// Password does not meet the minimum length
    InvalidPassword,
    /// Todo title missing or empty
    InvalidTitle,

    // Resource not found
    /// User not found
    UserNotFound,
    /// Todo not found (or owned by someone else; indistinguishable on purpose)
    TodoNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Email already registered
    EmailTaken,
    /// Generic conflict (fallback for unmatched constraint violations)
    Conflict,

    // System errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// The canonical SCREAMING_SNAKE_CASE string for this code, exactly as
    /// it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TodoNotFound => "TODO_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
