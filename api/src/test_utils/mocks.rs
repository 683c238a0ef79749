//! In-memory implementations of the repository ports
//!
//! They store data behind an `RwLock<HashMap>` and can be pre-populated
//! with the `with_*` builders. The `failing()` constructors return a
//! repository whose every call reports a storage failure, for exercising
//! the error-propagation and compensation paths.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Book, BookId, NewBook, NewOrder, NewUser, Order, OrderId, OrderStatus, User, UserId,
};
use crate::domain::ports::{BookRepository, OrderRepository, UserRepository};
use crate::error::DomainError;

fn storage_failure() -> DomainError {
    DomainError::Database("simulated storage failure".to_string())
}

// ============================================================================
// In-Memory Book Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, Book>>>,
    fail: bool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call on this repository reports a storage failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a book for testing
    pub fn with_book(self, book: Book) -> Self {
        {
            let mut books = self.books.write().unwrap();
            books.insert(book.id, book);
        }
        self
    }

    fn guard(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn save(&self, book: &NewBook) -> Result<Book, DomainError> {
        self.guard()?;
        let saved = Book {
            id: BookId::new(),
            title: book.title.clone(),
            price: book.price,
            stock: book.stock,
        };
        let mut books = self.books.write().unwrap();
        books.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        self.guard()?;
        let books = self.books.read().unwrap();
        Ok(books.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        self.guard()?;
        let books = self.books.read().unwrap();
        Ok(books.values().cloned().collect())
    }

    async fn update(&self, book: &Book) -> Result<Book, DomainError> {
        self.guard()?;
        let mut books = self.books.write().unwrap();
        books.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, id: &BookId) -> Result<bool, DomainError> {
        self.guard()?;
        let mut books = self.books.write().unwrap();
        Ok(books.remove(id).is_some())
    }

    async fn decrement_stock(
        &self,
        id: &BookId,
        amount: i32,
    ) -> Result<Option<Book>, DomainError> {
        self.guard()?;
        let mut books = self.books.write().unwrap();
        match books.get_mut(id) {
            Some(book) if book.stock >= amount => {
                book.stock -= amount;
                Ok(Some(book.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn increment_stock(&self, id: &BookId, amount: i32) -> Result<(), DomainError> {
        self.guard()?;
        let mut books = self.books.write().unwrap();
        if let Some(book) = books.get_mut(id) {
            book.stock += amount;
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    fail: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call on this repository reports a storage failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        {
            let mut users = self.users.write().unwrap();
            users.insert(user.id, user);
        }
        self
    }

    fn guard(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &NewUser) -> Result<User, DomainError> {
        self.guard()?;
        let saved = User {
            id: UserId::new(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role.clone(),
        };
        let mut users = self.users.write().unwrap();
        users.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.guard()?;
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.guard()?;
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.guard()?;
        let users = self.users.read().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        self.guard()?;
        let mut users = self.users.write().unwrap();
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        self.guard()?;
        let mut users = self.users.write().unwrap();
        Ok(users.remove(id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        self.guard()?;
        let users = self.users.read().unwrap();
        Ok(users.values().any(|u| u.email == email))
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
    fail: bool,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call on this repository reports a storage failure
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn guard(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(storage_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &NewOrder) -> Result<Order, DomainError> {
        self.guard()?;
        let saved = Order {
            id: OrderId::new(),
            user_id: order.user_id,
            book_id: order.book_id,
            quantity: order.quantity,
            total: order.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        let mut orders = self.orders.write().unwrap();
        orders.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        self.guard()?;
        let orders = self.orders.read().unwrap();
        Ok(orders.get(id).cloned())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Order>, DomainError> {
        self.guard()?;
        let orders = self.orders.read().unwrap();
        Ok(orders
            .values()
            .filter(|o| o.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        self.guard()?;
        let orders = self.orders.read().unwrap();
        Ok(orders.values().cloned().collect())
    }

    async fn update(&self, order: &Order) -> Result<Order, DomainError> {
        self.guard()?;
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id, order.clone());
        Ok(order.clone())
    }

    async fn delete(&self, id: &OrderId) -> Result<bool, DomainError> {
        self.guard()?;
        let mut orders = self.orders.write().unwrap();
        Ok(orders.remove(id).is_some())
    }
}
