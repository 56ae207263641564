use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{Value};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::summary_cmd::{SummaryCommand, SummaryCommandRequest};
use crate::catalog::factory::create_catalog_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_rejection_to_server_error, json_to_server_error, ServerError};

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub library_name: String,
    pub total_books: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub library_name: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/books", get(list_books).post(add_book))
        .route("/books/:isbn",
               get(find_book_by_isbn).delete(remove_book))
        .with_state(state)
}

pub async fn root(
    State(state): State<AppState>) -> Result<Json<RootResponse>, ServerError> {
    let res = SummaryCommand::new(create_catalog_service(&state))
        .execute(SummaryCommandRequest::default()).await?;
    Ok(Json(RootResponse {
        message: "Library Management API".to_string(),
        library_name: res.library_name,
        total_books: res.total_books,
    }))
}

pub async fn health(
    State(state): State<AppState>) -> Result<Json<HealthResponse>, ServerError> {
    let res = SummaryCommand::new(create_catalog_service(&state))
        .execute(SummaryCommandRequest::default()).await?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        library_name: res.library_name,
    }))
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<ListBooksCommandResponse>, ServerError> {
    let res = ListBooksCommand::new(create_catalog_service(&state))
        .execute(ListBooksCommandRequest::default()).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let Json(json) = payload.map_err(json_rejection_to_server_error)?;
    let req: AddBookCommandRequest = serde_json::from_value(json).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(create_catalog_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(create_catalog_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(create_catalog_service(&state)).execute(req).await?;
    Ok(Json(res))
}
