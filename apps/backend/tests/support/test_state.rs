use backend::config::db::DbProfile;
use backend::infra::state::build_state;
use backend::{AppError, AppState, SecurityConfig};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET.as_bytes())
}

/// State backed by a fresh migrated database (in-memory SQLite unless
/// `TEST_DATABASE_URL` points elsewhere). Each call gets its own database,
/// so tests stay isolated.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::Test)
        .with_security(test_security())
        .build()
        .await
}
