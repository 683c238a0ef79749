//! User handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::app::{LoginInput, RegisterInput};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::handlers::{success, ApiResponse};
use crate::AppState;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Request body for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for user operations. The password hash never leaves the
/// server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let user = state
        .user_service
        .register(RegisterInput {
            name: request.name,
            email: request.email,
            password: request.password,
            role: request.role,
        })
        .await?;

    Ok(success(StatusCode::CREATED, user.into()))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let user = state
        .user_service
        .login(LoginInput {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(success(StatusCode::OK, user.into()))
}
