use std::sync::Arc;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use crate::books::repository::Library;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::lookup::CatalogLookup;

// AppState is shared by every request; the library is guarded by a single mutex that is
// held across a mutation and the persist that follows it.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub library: Arc<Mutex<Library>>,
    pub lookup: Arc<dyn CatalogLookup>,
}

impl AppState {
    pub fn new(config: Configuration, library: Library, lookup: Arc<dyn CatalogLookup>) -> AppState {
        AppState {
            config,
            library: Arc::new(Mutex::new(library)),
            lookup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

pub type ServerError = (StatusCode, Json<ErrorDetail>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorDetail::new(format!("{}", err).as_str())))
}

// A body that is not json, or is sent without a json content type, is a bad request.
pub fn json_rejection_to_server_error(rejection: JsonRejection) -> ServerError {
    (StatusCode::BAD_REQUEST, Json(ErrorDetail::new(rejection.body_text().as_str())))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::DuplicateKey { .. } => {
                StatusCode::CONFLICT
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(ErrorDetail::new(err.message())))
    }
}
