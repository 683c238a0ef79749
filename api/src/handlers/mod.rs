//! HTTP handlers
//!
//! Axum request handlers for the API endpoints. Every success body is
//! `{code, status: "success", data}`; errors are produced by `AppError`
//! with the same envelope and a `message` instead of `data`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub mod books;
pub mod orders;
pub mod users;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use orders::{create_order, get_order, list_orders, list_user_orders};
pub use users::{login, register};

/// Success response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: &'static str,
    pub data: T,
}

/// Wrap a payload in the success envelope
pub fn success<T: Serialize>(code: StatusCode, data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        code,
        Json(ApiResponse {
            code: code.as_u16(),
            status: "success",
            data,
        }),
    )
}
