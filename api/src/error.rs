//! Unified error types for the bookshop API
//!
//! Two layers:
//! - `DomainError`: business rule violations and storage failures
//! - `AppError`: HTTP-facing errors, mapped to the response envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - business rule violations plus an unclassified
/// storage failure. Everything except `Database` maps to a fixed HTTP
/// status at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("book not found")]
    BookNotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("order not found")]
    OrderNotFound,

    #[error("insufficient stock")]
    InsufficientStock,

    #[error("price must be positive")]
    InvalidPrice,

    #[error("stock cannot be negative")]
    InvalidStock,

    #[error("quantity must be positive")]
    InvalidQuantity,

    #[error("email already exists")]
    EmailExists,

    #[error("invalid email or password")]
    InvalidCredential,

    #[error("unauthorized access")]
    Unauthorized,

    #[error("database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    BadRequest(String),
}

/// Error response envelope: `{code, status: "error", message}`
#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    status: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Domain(DomainError::BookNotFound)
            | AppError::Domain(DomainError::UserNotFound)
            | AppError::Domain(DomainError::OrderNotFound) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Domain(DomainError::InsufficientStock)
            | AppError::Domain(DomainError::InvalidPrice)
            | AppError::Domain(DomainError::InvalidStock)
            | AppError::Domain(DomainError::InvalidQuantity) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Domain(DomainError::EmailExists) => (StatusCode::CONFLICT, self.to_string()),
            AppError::Domain(DomainError::InvalidCredential)
            | AppError::Domain(DomainError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Domain(DomainError::Database(msg)) => {
                // Storage detail goes to the log, never to the caller.
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = Json(ErrorBody {
            code: status.as_u16(),
            status: "error",
            message,
        });

        (status, body).into_response()
    }
}
