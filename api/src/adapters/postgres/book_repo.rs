//! PostgreSQL adapter for BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Book, BookId, NewBook};
use crate::domain::ports::BookRepository;
use crate::entity::books;
use crate::error::DomainError;

/// PostgreSQL implementation of BookRepository
pub struct PostgresBookRepository {
    db: DatabaseConnection,
}

impl PostgresBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn save(&self, book: &NewBook) -> Result<Book, DomainError> {
        let model = books::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(book.title.clone()),
            price: Set(book.price),
            stock: Set(book.stock),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let result = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let results = books::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, book: &Book) -> Result<Book, DomainError> {
        let model = books::ActiveModel {
            id: Set(book.id.0),
            title: Set(book.title.clone()),
            price: Set(book.price),
            stock: Set(book.stock),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete(&self, id: &BookId) -> Result<bool, DomainError> {
        let result = books::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn decrement_stock(
        &self,
        id: &BookId,
        amount: i32,
    ) -> Result<Option<Book>, DomainError> {
        // UPDATE books SET stock = stock - $amount
        // WHERE id = $id AND stock >= $amount
        let result = books::Entity::update_many()
            .col_expr(
                books::Column::Stock,
                Expr::col(books::Column::Stock).sub(amount),
            )
            .filter(books::Column::Id.eq(id.0))
            .filter(books::Column::Stock.gte(amount))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    async fn increment_stock(&self, id: &BookId, amount: i32) -> Result<(), DomainError> {
        books::Entity::update_many()
            .col_expr(
                books::Column::Stock,
                Expr::col(books::Column::Stock).add(amount),
            )
            .filter(books::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Book {
            id: BookId(model.id),
            title: model.title,
            price: model.price,
            stock: model.stock,
        }
    }
}
