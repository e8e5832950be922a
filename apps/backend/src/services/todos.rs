use sea_orm::DatabaseConnection;
use tracing::info;

use crate::adapters::todos_sea::{TodoCreate, TodoUpdate};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::todos::{self as todos_repo, Todo};

fn todo_not_found() -> AppError {
    AppError::not_found(ErrorCode::TodoNotFound, "Todo not found")
}

pub async fn create_todo(
    db: &DatabaseConnection,
    user_id: i64,
    title: String,
    description: String,
    completed: bool,
) -> Result<Todo, AppError> {
    let dto = TodoCreate::new(user_id, title)
        .with_description(description)
        .with_completed(completed);

    let todo = todos_repo::create_todo(db, dto).await?;
    info!(user_id, todo_id = todo.id, "todo created");
    Ok(todo)
}

pub async fn list_todos(db: &DatabaseConnection, user_id: i64) -> Result<Vec<Todo>, AppError> {
    Ok(todos_repo::list_todos(db, user_id).await?)
}

pub async fn get_todo(
    db: &DatabaseConnection,
    user_id: i64,
    todo_id: i64,
) -> Result<Todo, AppError> {
    todos_repo::find_todo(db, user_id, todo_id)
        .await?
        .ok_or_else(todo_not_found)
}

pub async fn update_todo(
    db: &DatabaseConnection,
    user_id: i64,
    todo_id: i64,
    update: TodoUpdate,
) -> Result<Todo, AppError> {
    todos_repo::update_todo(db, user_id, todo_id, update)
        .await?
        .ok_or_else(todo_not_found)
}

pub async fn delete_todo(
    db: &DatabaseConnection,
    user_id: i64,
    todo_id: i64,
) -> Result<(), AppError> {
    let deleted = todos_repo::delete_todo(db, user_id, todo_id).await?;
    if !deleted {
        return Err(todo_not_found());
    }
    info!(user_id, todo_id, "todo deleted");
    Ok(())
}
