//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! "Not found" is always `Ok(None)` (or `Ok(false)` for delete), never an
//! error, so workflows can tell an absent record apart from a storage
//! failure and map each to the right domain error.

use async_trait::async_trait;

use crate::domain::entities::{Book, BookId, NewBook, NewOrder, NewUser, Order, OrderId, User, UserId};
use crate::error::DomainError;

/// Repository for Book entities
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persist a new book
    async fn save(&self, book: &NewBook) -> Result<Book, DomainError>;

    /// Find a book by ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError>;

    /// List the full catalog (no pagination)
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Overwrite all fields of an existing book
    async fn update(&self, book: &Book) -> Result<Book, DomainError>;

    /// Delete a book. Returns false when no such book existed.
    async fn delete(&self, id: &BookId) -> Result<bool, DomainError>;

    /// Atomically decrement stock, but only if `stock >= amount`.
    ///
    /// Returns the updated book, or `None` when the book is absent or the
    /// stock is insufficient. This is the single statement that keeps two
    /// concurrent orders from both passing the stock check.
    async fn decrement_stock(&self, id: &BookId, amount: i32)
        -> Result<Option<Book>, DomainError>;

    /// Unconditionally increment stock (compensation path for a failed
    /// order insert).
    async fn increment_stock(&self, id: &BookId, amount: i32) -> Result<(), DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn save(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Overwrite all fields of an existing user
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Delete a user. Returns false when no such user existed.
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;

    /// Check whether any user already has this email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}

/// Repository for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order (status pending, timestamp stamped here)
    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError>;

    /// Find an order by ID
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError>;

    /// Find all orders placed by a user
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError>;

    /// List all orders
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Overwrite an existing order (status transitions)
    async fn update(&self, order: &Order) -> Result<Order, DomainError>;

    /// Delete an order. Returns false when no such order existed.
    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError>;
}
