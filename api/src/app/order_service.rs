//! Order service
//!
//! The composite workflow: validates input, cross-references the user and
//! book repositories, reserves stock at order time, and persists the
//! decremented stock together with the new order.

use std::sync::Arc;

use crate::domain::entities::{BookId, NewOrder, Order, OrderId, UserId};
use crate::domain::ports::{BookRepository, OrderRepository, UserRepository};
use crate::error::{AppError, DomainError};

/// Input for creating an order
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub user_id: UserId,
    pub book_id: BookId,
    pub quantity: i32,
}

/// Service for placing and reading orders
pub struct OrderService<OR, BR, UR>
where
    OR: OrderRepository,
    BR: BookRepository,
    UR: UserRepository,
{
    orders: Arc<OR>,
    books: Arc<BR>,
    users: Arc<UR>,
}

impl<OR, BR, UR> OrderService<OR, BR, UR>
where
    OR: OrderRepository,
    BR: BookRepository,
    UR: UserRepository,
{
    pub fn new(orders: Arc<OR>, books: Arc<BR>, users: Arc<UR>) -> Self {
        Self {
            orders,
            books,
            users,
        }
    }

    /// Place an order, short-circuiting on the first failed check.
    ///
    /// Stock is reserved at order time: the storage-level conditional
    /// decrement only succeeds while `stock >= quantity`, so two concurrent
    /// orders for the same book cannot both drain the same units. The total
    /// is computed from the price read before the decrement; a later price
    /// change never retroactively reprices an order.
    pub async fn create(&self, input: CreateOrderInput) -> Result<Order, AppError> {
        if input.quantity <= 0 {
            return Err(DomainError::InvalidQuantity.into());
        }

        // Any lookup failure, storage errors included, surfaces as the
        // entity being unknown.
        let user = match self.users.find_by_id(&input.user_id).await {
            Ok(Some(user)) => user,
            _ => return Err(DomainError::UserNotFound.into()),
        };

        let mut book = match self.books.find_by_id(&input.book_id).await {
            Ok(Some(book)) => book,
            _ => return Err(DomainError::BookNotFound.into()),
        };

        // Fast fail against the snapshot; the conditional decrement below
        // is the authoritative guard.
        book.decrease_stock(input.quantity)?;

        let total = book.price * f64::from(input.quantity);

        if self
            .books
            .decrement_stock(&book.id, input.quantity)
            .await?
            .is_none()
        {
            return Err(DomainError::InsufficientStock.into());
        }

        let new_order = NewOrder {
            user_id: user.id,
            book_id: book.id,
            quantity: input.quantity,
            total,
        };

        match self.orders.save(&new_order).await {
            Ok(order) => Ok(order),
            Err(err) => {
                // The stock is already gone; put it back before surfacing
                // the insert failure.
                if let Err(restore_err) =
                    self.books.increment_stock(&book.id, input.quantity).await
                {
                    tracing::error!(
                        book_id = %book.id,
                        quantity = input.quantity,
                        error = %restore_err,
                        "failed to restore stock after order insert failure"
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Find an order by ID
    pub async fn find_by_id(&self, id: &OrderId) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::OrderNotFound.into())
    }

    /// Find all orders placed by a user
    pub async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_by_user_id(user_id).await?)
    }

    /// List all orders
    pub async fn find_all(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.find_all().await?)
    }
}
