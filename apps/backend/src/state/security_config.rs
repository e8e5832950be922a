use jsonwebtoken::Algorithm;
use tracing::warn;

use crate::config::env::AppEnv;
use crate::error::AppError;

/// Fixed fallback secret for local development only. Predictable by design;
/// `from_env` refuses to fall back to it outside development mode.
const DEV_FALLBACK_SECRET: &[u8] = b"insecure-dev-secret-do-not-deploy";

/// Configuration for JWT signing and verification.
///
/// Built once at startup and carried inside `AppState`; nothing reads the
/// secret from the environment after that.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the secret from `APP_JWT_SECRET`.
    ///
    /// Missing or empty secret is a startup failure, except in development
    /// mode where the fixed fallback is used and loudly logged. The original
    /// service fell back silently in every environment; that is exactly the
    /// misconfiguration this refuses to carry into production.
    pub fn from_env(app_env: AppEnv) -> Result<Self, AppError> {
        match std::env::var("APP_JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(Self::new(secret.into_bytes())),
            _ if app_env.is_development() => {
                warn!("APP_JWT_SECRET is not set; using the fixed development secret");
                Ok(Self::new(DEV_FALLBACK_SECRET))
            }
            _ => Err(AppError::config(
                "APP_JWT_SECRET must be set when APP_ENV is not development",
            )),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(DEV_FALLBACK_SECRET)
    }
}
