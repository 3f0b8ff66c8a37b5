use actix_web::{
    error::JsonPayloadError, http::StatusCode, HttpMessage, HttpRequest, HttpResponse,
    ResponseError,
};
use serde::Serialize;
use thiserror::Error;

use crate::middleware::RequestId;

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TodoError {
    /// Carries the requested id for logging; the response body stays generic.
    #[error("Todo not found")]
    NotFound(String),

    #[error("Invalid input")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for TodoError {
    fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TodoError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            TodoError::SerializationError(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: message })
    }
}

/// Maps any body extraction failure onto the 400 `Invalid input` response.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();
    log::debug!(
        "[{}] Rejected body for {} {}: {}",
        request_id,
        req.method(),
        req.path(),
        err
    );
    TodoError::InvalidInput(err.to_string()).into()
}
