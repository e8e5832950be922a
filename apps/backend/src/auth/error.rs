use thiserror::Error;

/// Internal authentication failure taxonomy.
///
/// Every variant except `InvalidSubject` and `Signing` can be triggered by
/// request input; none of them may be distinguishable from outside. The
/// conversion in `crate::error` collapses them to the generic 401.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Issuance was asked to encode a non-positive user id
    #[error("subject must be a positive user id")]
    InvalidSubject,
    /// Token signing failed; cannot happen for well-formed claims
    #[error("token signing failed: {0}")]
    Signing(String),
    /// Authorization header absent or empty
    #[error("missing Authorization header")]
    MissingHeader,
    /// Header present but not `Bearer` + one space + a token
    #[error("malformed Authorization header")]
    MalformedHeader,
    /// Not structurally a JWT of the expected algorithm
    #[error("malformed token")]
    MalformedToken,
    /// Signature does not verify against the configured secret
    #[error("bad token signature")]
    BadSignature,
    /// Token is past its expiry
    #[error("token expired")]
    Expired,
}
