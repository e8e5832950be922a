//! Helpers for generating unique test data.
//!
//! ULID-suffixed values keep concurrently running tests from colliding on
//! unique columns (e.g. `user_credentials.email`).

use ulid::Ulid;

/// A unique string of the form `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique email of the form `{prefix}-{ulid}@example.test`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}
