use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::todos_sea::TodoUpdate;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::CurrentUser;
use crate::repos::todos::Todo;
use crate::services::todos as todos_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            user_id: todo.user_id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::InvalidTitle,
            "Title cannot be empty",
        ));
    }
    Ok(())
}

async fn create(
    user: CurrentUser,
    req: web::Json<TodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    validate_title(&req.title)?;
    let db = require_db(&app_state)?;

    let req = req.into_inner();
    let todo =
        todos_service::create_todo(db, user.id, req.title, req.description, req.completed).await?;

    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

async fn list(user: CurrentUser, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let todos = todos_service::list_todos(db, user.id).await?;
    let body: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

async fn get(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    let todo = todos_service::get_todo(db, user.id, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn update(
    user: CurrentUser,
    path: web::Path<i64>,
    req: web::Json<TodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    validate_title(&req.title)?;
    let db = require_db(&app_state)?;

    let req = req.into_inner();
    let update = TodoUpdate {
        title: req.title,
        description: req.description,
        completed: req.completed,
    };
    let todo = todos_service::update_todo(db, user.id, path.into_inner(), update).await?;

    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn delete(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    todos_service::delete_todo(db, user.id, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get))
            .route(web::put().to(update))
            .route(web::delete().to(delete)),
    );
}
