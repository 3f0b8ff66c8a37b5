use actix_web::{http::StatusCode, web, HttpResponse};

use super::indented_json;
use crate::error::Result;
use crate::state::AppState;
use crate::store::TodoInput;

/// GET /todos
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse> {
    let todos = state.store.list().await;
    indented_json(StatusCode::OK, &todos)
}

/// GET /todos/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let todo = state.store.get(&id).await?;
    indented_json(StatusCode::OK, &todo)
}

/// POST /todos
///
/// The id is always assigned by the store; an `id` in the body is ignored.
/// A JSON `null` body is treated as an empty object.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<Option<TodoInput>>,
) -> Result<HttpResponse> {
    let todo = state.store.add(body.into_inner().unwrap_or_default()).await;
    indented_json(StatusCode::CREATED, &todo)
}

/// PUT /todos/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Option<TodoInput>>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let input = body.into_inner().unwrap_or_default();
    let todo = state.store.update(&id, input).await?;
    indented_json(StatusCode::OK, &todo)
}

/// DELETE /todos/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = path.into_inner();
    state.store.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
