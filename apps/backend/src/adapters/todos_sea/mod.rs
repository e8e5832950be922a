//! SeaORM adapter for the todo repository.
//!
//! Every function takes the owning `user_id` and filters on it in the
//! query itself; there is no way to reach another user's row from here.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::todos;

pub mod dto;

pub use dto::{TodoCreate, TodoUpdate};

pub async fn insert_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TodoCreate,
) -> Result<todos::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let todo_active = todos::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        title: Set(dto.title),
        description: Set(dto.description),
        completed: Set(dto.completed),
        created_at: Set(now),
        updated_at: Set(now),
    };

    todo_active.insert(conn).await
}

pub async fn list_todos_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find()
        .filter(todos::Column::UserId.eq(user_id))
        .order_by_asc(todos::Column::Id)
        .all(conn)
        .await
}

pub async fn find_todo_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    todos::Entity::find()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Replace title/description/completed of the user's todo.
/// `Ok(None)` when the todo does not exist or belongs to someone else.
pub async fn update_todo_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    dto: TodoUpdate,
) -> Result<Option<todos::Model>, sea_orm::DbErr> {
    let Some(existing) = find_todo_for_user(conn, user_id, todo_id).await? else {
        return Ok(None);
    };

    let mut active: todos::ActiveModel = existing.into();
    active.title = Set(dto.title);
    active.description = Set(dto.description);
    active.completed = Set(dto.completed);
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await.map(Some)
}

/// Delete the user's todo. `Ok(false)` when nothing matched.
pub async fn delete_todo_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let result = todos::Entity::delete_many()
        .filter(todos::Column::Id.eq(todo_id))
        .filter(todos::Column::UserId.eq(user_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected > 0)
}
