//! User repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea as users_adapter;
use crate::adapters::users_sea::CredentialsCreate;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

/// User credentials domain model
#[derive(Debug, Clone, PartialEq)]
pub struct UserCredentials {
    pub id: i64,
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub last_login: Option<time::OffsetDateTime>,
}

pub async fn find_credentials_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<UserCredentials>, DomainError> {
    let credential = users_adapter::find_credentials_by_email(conn, email)
        .await
        .map_err(map_db_err)?;
    Ok(credential.map(UserCredentials::from))
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_user_by_id(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(user.map(User::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn).await.map_err(map_db_err)?;
    Ok(User::from(user))
}

pub async fn create_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    email: &str,
    password_hash: &str,
) -> Result<UserCredentials, DomainError> {
    let credential = users_adapter::create_credentials(
        conn,
        CredentialsCreate::new(user_id, email, password_hash),
    )
    .await
    .map_err(map_db_err)?;
    Ok(UserCredentials::from(credential))
}

pub async fn touch_last_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    credential_id: i64,
) -> Result<UserCredentials, DomainError> {
    let credential = users_adapter::touch_last_login(conn, credential_id)
        .await
        .map_err(map_db_err)?;
    Ok(UserCredentials::from(credential))
}

// Conversions between SeaORM models and domain models

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<crate::entities::user_credentials::Model> for UserCredentials {
    fn from(model: crate::entities::user_credentials::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            email: model.email,
            password_hash: model.password_hash,
            last_login: model.last_login,
        }
    }
}
