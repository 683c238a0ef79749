//! Book domain entity
//!
//! A catalog entry with a price and an inventory count. Stock mutations go
//! through the entity methods so the non-negative invariant holds.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(pub Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BookId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub price: f64,
    pub stock: i32,
}

impl Book {
    /// Check if the book has any stock left
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Decrease stock by the given amount.
    ///
    /// Fails with `InsufficientStock` when `amount` exceeds the current
    /// stock; the stock is left unchanged in that case.
    pub fn decrease_stock(&mut self, amount: i32) -> Result<(), DomainError> {
        if self.stock < amount {
            return Err(DomainError::InsufficientStock);
        }
        self.stock -= amount;
        Ok(())
    }

    /// Increase stock by the given amount. Unconditional.
    pub fn increase_stock(&mut self, amount: i32) {
        self.stock += amount;
    }
}

/// Data needed to create a new book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub price: f64,
    pub stock: i32,
}
