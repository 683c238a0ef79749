//! Book service
//!
//! Validation and CRUD orchestration for the catalog.

use std::sync::Arc;

use crate::domain::entities::{Book, BookId, NewBook};
use crate::domain::ports::BookRepository;
use crate::error::{AppError, DomainError};

/// Input for creating a book
#[derive(Debug, Clone)]
pub struct CreateBookInput {
    pub title: String,
    pub price: f64,
    pub stock: i32,
}

/// Input for updating a book
#[derive(Debug, Clone)]
pub struct UpdateBookInput {
    pub id: BookId,
    pub title: String,
    pub price: f64,
    pub stock: i32,
}

/// Service for managing the book catalog
pub struct BookService<BR>
where
    BR: BookRepository,
{
    books: Arc<BR>,
}

impl<BR> BookService<BR>
where
    BR: BookRepository,
{
    pub fn new(books: Arc<BR>) -> Self {
        Self { books }
    }

    /// Create a new book after validating price and stock
    pub async fn create(&self, input: CreateBookInput) -> Result<Book, AppError> {
        validate_price_and_stock(input.price, input.stock)?;

        let book = self
            .books
            .save(&NewBook {
                title: input.title,
                price: input.price,
                stock: input.stock,
            })
            .await?;

        Ok(book)
    }

    /// Find a book by ID
    pub async fn find_by_id(&self, id: &BookId) -> Result<Book, AppError> {
        self.books
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::BookNotFound.into())
    }

    /// List the full catalog
    pub async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.books.find_all().await?)
    }

    /// Update an existing book, overwriting all fields
    pub async fn update(&self, input: UpdateBookInput) -> Result<Book, AppError> {
        validate_price_and_stock(input.price, input.stock)?;

        if self.books.find_by_id(&input.id).await?.is_none() {
            return Err(DomainError::BookNotFound.into());
        }

        let updated = self
            .books
            .update(&Book {
                id: input.id,
                title: input.title,
                price: input.price,
                stock: input.stock,
            })
            .await?;

        Ok(updated)
    }

    /// Delete a book by ID
    pub async fn delete(&self, id: &BookId) -> Result<(), AppError> {
        if !self.books.delete(id).await? {
            return Err(DomainError::BookNotFound.into());
        }
        Ok(())
    }
}

fn validate_price_and_stock(price: f64, stock: i32) -> Result<(), DomainError> {
    if price <= 0.0 {
        return Err(DomainError::InvalidPrice);
    }
    if stock < 0 {
        return Err(DomainError::InvalidStock);
    }
    Ok(())
}
