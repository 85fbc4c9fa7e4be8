//! Books table access

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput},
};

/// Storage operations on the `books` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// Liveness check against the store
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// All books, without `updated_at`
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Book>;

    /// Insert a book; returns the generated id, if the store reported one
    async fn insert(
        &self,
        data: &BookInput,
        created_at: NaiveDateTime,
    ) -> Result<Option<i32>, sqlx::Error>;

    /// Returns the number of rows touched
    async fn update(
        &self,
        id: i32,
        data: &BookInput,
        updated_at: NaiveDateTime,
    ) -> AppResult<u64>;

    /// Returns the number of rows removed
    async fn delete(&self, id: i32) -> AppResult<u64>;
}

#[async_trait]
impl BooksRepository for Repository {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, name, category_id, created_at FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, name, category_id, created_at, updated_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with {} not found", id)))
    }

    async fn insert(
        &self,
        data: &BookInput,
        created_at: NaiveDateTime,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (name, category_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(created_at)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(
        &self,
        id: i32,
        data: &BookInput,
        updated_at: NaiveDateTime,
    ) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE books SET name = $1, category_id = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
