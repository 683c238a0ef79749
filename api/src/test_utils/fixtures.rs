//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::auth::hash_password;
use crate::domain::entities::{Book, BookId, User, UserId};

/// Create a test book with default values
pub fn test_book() -> Book {
    test_book_with(45.0, 10)
}

/// Create a test book with a specific price and stock
pub fn test_book_with(price: f64, stock: i32) -> Book {
    Book {
        id: BookId::new(),
        title: "The Pragmatic Programmer".to_string(),
        price,
        stock,
    }
}

/// Create a test customer whose password is "secret123"
pub fn test_user() -> User {
    User {
        id: UserId::new(),
        name: "Test User".to_string(),
        email: format!("user-{}@example.com", Uuid::new_v4()),
        password_hash: hash_password("secret123"),
        role: "customer".to_string(),
    }
}
