//! PostgreSQL adapter for OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{BookId, NewOrder, Order, OrderId, OrderStatus, UserId};
use crate::domain::ports::OrderRepository;
use crate::entity::orders;
use crate::error::DomainError;

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(order.user_id.0),
            book_id: Set(order.book_id.0),
            quantity: Set(order.quantity),
            total: Set(order.total),
            status: Set(OrderStatus::Pending.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let result = orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id.0))
            .order_by_desc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let results = orders::Entity::find()
            .order_by_desc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: Set(order.id.0),
            user_id: Set(order.user_id.0),
            book_id: Set(order.book_id.0),
            quantity: Set(order.quantity),
            total: Set(order.total),
            status: Set(order.status.to_string()),
            created_at: Set(order.created_at.fixed_offset()),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError> {
        let result = orders::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Order {
            id: OrderId(model.id),
            user_id: UserId(model.user_id),
            book_id: BookId(model.book_id),
            quantity: model.quantity,
            total: model.total,
            status: model.status.parse().unwrap_or(OrderStatus::Pending),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
