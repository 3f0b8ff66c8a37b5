use actix_web::{web, HttpResponse};

use crate::state::AppState;

pub async fn handler(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "todos": state.store.len().await
    }))
}
