use actix_web::http::header::HeaderValue;

use crate::auth::error::AuthError;

/// Extract the token from an `Authorization` header.
///
/// The accepted grammar is exactly `Bearer` + one space + a non-empty token.
/// Anything else (wrong scheme, prefix only, extra spaces, empty token) is
/// malformed; an absent or empty header is missing.
pub fn bearer_token(header: Option<&HeaderValue>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingHeader)?;
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    if value.is_empty() {
        return Err(AuthError::MissingHeader);
    }

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(parts[1])
}
