//! DTOs for the users_sea adapter.

/// DTO for creating new user credentials.
#[derive(Debug, Clone)]
pub struct CredentialsCreate {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
}

impl CredentialsCreate {
    pub fn new(
        user_id: i64,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
