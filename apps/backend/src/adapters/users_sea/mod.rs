//! SeaORM adapter for the user repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::{user_credentials, users};

pub mod dto;

pub use dto::CredentialsCreate;

// Adapter functions return DbErr; the repos layer maps to DomainError.

pub async fn find_credentials_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<user_credentials::Model>, sea_orm::DbErr> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    };

    user_active.insert(conn).await
}

pub async fn create_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CredentialsCreate,
) -> Result<user_credentials::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let credential_active = user_credentials::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    credential_active.insert(conn).await
}

/// Stamp `last_login` (and `updated_at`) on successful authentication.
pub async fn touch_last_login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    credential_id: i64,
) -> Result<user_credentials::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = user_credentials::ActiveModel {
        id: Set(credential_id),
        last_login: Set(Some(now)),
        updated_at: Set(now),
        ..Default::default()
    };
    active.update(conn).await
}
