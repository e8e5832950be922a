use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::pii::Redacted;
use crate::repos::users::{self as users_repo, User};

/// Register a new account: one user row plus one credentials row, created
/// atomically. A taken email surfaces as a conflict either from the
/// pre-check or, under a race, from the unique constraint.
pub async fn register_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let password_hash = hash_password(password)?;

    let txn = db
        .begin()
        .await
        .map_err(|e| AppError::db(format!("failed to begin registration transaction: {e}")))?;

    if users_repo::find_credentials_by_email(&txn, email)
        .await?
        .is_some()
    {
        return Err(DomainError::conflict(
            ConflictKind::UniqueEmail,
            "Email already registered",
        )
        .into());
    }

    let user = users_repo::create_user(&txn).await?;
    users_repo::create_credentials(&txn, user.id, email, &password_hash).await?;

    txn.commit()
        .await
        .map_err(|e| AppError::db(format!("failed to commit registration: {e}")))?;

    info!(user_id = user.id, email = %Redacted(email), "new user registered");

    Ok(user)
}

/// Verify a submitted email/password pair and return the matching user.
///
/// Unknown email and wrong password produce the same error; the response
/// must not reveal whether the email exists.
pub async fn verify_credentials(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let Some(credential) = users_repo::find_credentials_by_email(db, email).await? else {
        warn!(email = %Redacted(email), "login attempt for unknown email");
        return Err(AppError::invalid_credentials());
    };

    if !verify_password(password, &credential.password_hash) {
        warn!(user_id = credential.user_id, "login attempt with wrong password");
        return Err(AppError::invalid_credentials());
    }

    let user = users_repo::find_user_by_id(db, credential.user_id)
        .await?
        .ok_or_else(|| AppError::internal("credentials reference a missing user"))?;

    users_repo::touch_last_login(db, credential.id).await?;

    info!(user_id = user.id, "user logged in");

    Ok(user)
}
