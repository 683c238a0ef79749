//! Book handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{CreateBookInput, UpdateBookInput};
use crate::domain::entities::{Book, BookId};
use crate::error::AppError;
use crate::handlers::{success, ApiResponse};
use crate::AppState;

/// Request to create or update a book
#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub price: f64,
    pub stock: i32,
}

/// Response body for book operations
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub stock: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            id: book.id.to_string(),
            title: book.title,
            price: book.price,
            stock: book.stock,
        }
    }
}

fn parse_book_id(id: &str) -> Result<BookId, AppError> {
    Uuid::parse_str(id)
        .map(BookId)
        .map_err(|_| AppError::BadRequest("invalid book id".to_string()))
}

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookResponse>>), AppError> {
    let book = state
        .book_service
        .create(CreateBookInput {
            title: request.title,
            price: request.price,
            stock: request.stock,
        })
        .await?;

    Ok(success(StatusCode::CREATED, book.into()))
}

/// GET /books
pub async fn list_books(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<BookResponse>>>), AppError> {
    let books = state.book_service.find_all().await?;

    Ok(success(
        StatusCode::OK,
        books.into_iter().map(BookResponse::from).collect(),
    ))
}

/// GET /books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<BookResponse>>), AppError> {
    let id = parse_book_id(&id)?;
    let book = state.book_service.find_by_id(&id).await?;

    Ok(success(StatusCode::OK, book.into()))
}

/// PUT /books/:id
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<BookRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookResponse>>), AppError> {
    let id = parse_book_id(&id)?;
    let book = state
        .book_service
        .update(UpdateBookInput {
            id,
            title: request.title,
            price: request.price,
            stock: request.stock,
        })
        .await?;

    Ok(success(StatusCode::OK, book.into()))
}

/// DELETE /books/:id
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<serde_json::Value>>), AppError> {
    let id = parse_book_id(&id)?;
    state.book_service.delete(&id).await?;

    Ok(success(StatusCode::OK, serde_json::Value::Null))
}
