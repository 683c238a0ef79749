//! Order handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::CreateOrderInput;
use crate::domain::entities::{BookId, Order, OrderId, UserId};
use crate::error::AppError;
use crate::handlers::{success, ApiResponse};
use crate::AppState;

/// Request body for creating an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,
    pub book_id: Uuid,
    pub quantity: i32,
}

/// Response body for order operations
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub quantity: i32,
    pub total: f64,
    pub status: String,
    pub created_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.to_string(),
            user_id: order.user_id.to_string(),
            book_id: order.book_id.to_string(),
            quantity: order.quantity,
            total: order.total,
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
        }
    }
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderResponse>>), AppError> {
    let order = state
        .order_service
        .create(CreateOrderInput {
            user_id: UserId(request.user_id),
            book_id: BookId(request.book_id),
            quantity: request.quantity,
        })
        .await?;

    Ok(success(StatusCode::CREATED, order.into()))
}

/// GET /orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<OrderResponse>>>), AppError> {
    let orders = state.order_service.find_all().await?;

    Ok(success(
        StatusCode::OK,
        orders.into_iter().map(OrderResponse::from).collect(),
    ))
}

/// GET /orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<OrderResponse>>), AppError> {
    let id = Uuid::parse_str(&id)
        .map(OrderId)
        .map_err(|_| AppError::BadRequest("invalid order id".to_string()))?;
    let order = state.order_service.find_by_id(&id).await?;

    Ok(success(StatusCode::OK, order.into()))
}

/// GET /users/:user_id/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<OrderResponse>>>), AppError> {
    let user_id = Uuid::parse_str(&user_id)
        .map(UserId)
        .map_err(|_| AppError::BadRequest("invalid user id".to_string()))?;
    let orders = state.order_service.find_by_user_id(&user_id).await?;

    Ok(success(
        StatusCode::OK,
        orders.into_iter().map(OrderResponse::from).collect(),
    ))
}
