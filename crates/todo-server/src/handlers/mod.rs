pub mod health;
pub mod todos;

use actix_web::{http::header::ContentType, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::TodoError;

/// Serialize `value` as four-space indented JSON.
pub(crate) fn indented_json<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<HttpResponse, TodoError> {
    let mut body = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body))
}

/// Fallback for paths and methods no route matches
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Not found"
    }))
}
