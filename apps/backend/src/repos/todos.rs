//! Todo repository functions for the domain layer (generic over ConnectionTrait).
//!
//! Every function is scoped to an owning `user_id`; callers cannot express
//! an unscoped lookup.

use sea_orm::ConnectionTrait;

use crate::adapters::todos_sea as todos_adapter;
use crate::adapters::todos_sea::{TodoCreate, TodoUpdate};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Todo domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
}

pub async fn create_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TodoCreate,
) -> Result<Todo, DomainError> {
    let todo = todos_adapter::insert_todo(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Todo::from(todo))
}

pub async fn list_todos<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Todo>, DomainError> {
    let todos = todos_adapter::list_todos_by_user(conn, user_id)
        .await
        .map_err(map_db_err)?;
    Ok(todos.into_iter().map(Todo::from).collect())
}

pub async fn find_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<Option<Todo>, DomainError> {
    let todo = todos_adapter::find_todo_for_user(conn, user_id, todo_id)
        .await
        .map_err(map_db_err)?;
    Ok(todo.map(Todo::from))
}

pub async fn update_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
    dto: TodoUpdate,
) -> Result<Option<Todo>, DomainError> {
    let todo = todos_adapter::update_todo_for_user(conn, user_id, todo_id, dto)
        .await
        .map_err(map_db_err)?;
    Ok(todo.map(Todo::from))
}

pub async fn delete_todo<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    todo_id: i64,
) -> Result<bool, DomainError> {
    todos_adapter::delete_todo_for_user(conn, user_id, todo_id)
        .await
        .map_err(map_db_err)
}

impl From<crate::entities::todos::Model> for Todo {
    fn from(model: crate::entities::todos::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
