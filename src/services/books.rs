//! Books service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{timestamp, Book, BookInput},
    repository::BooksRepository,
};

pub const BOOK_NOT_STORED: &str = "Error, Book not stored";
pub const LAST_INSERT_ID_NOT_FOUND: &str = "Error, Last Insert Id not found";

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BooksRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BooksRepository>) -> Self {
        Self { repository }
    }

    /// Check the store is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await?;
        Ok(())
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.find_by_id(id).await
    }

    /// Store a new book stamped with the current time.
    ///
    /// Returns the generated id.
    pub async fn create(&self, data: &BookInput) -> AppResult<i32> {
        let created_at = timestamp::now();

        let id = self
            .repository
            .insert(data, created_at)
            .await
            .map_err(|e| {
                tracing::error!("Insert failed: {}", e);
                AppError::Internal(BOOK_NOT_STORED.to_string())
            })?
            .ok_or_else(|| AppError::Internal(LAST_INSERT_ID_NOT_FOUND.to_string()))?;

        tracing::info!(book_id = id, "Book stored");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BookInput) -> AppResult<()> {
        let updated = self.repository.update(id, data, timestamp::now()).await?;
        if updated == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::books::MockBooksRepository;
    use mockall::predicate::eq;

    fn service(repo: MockBooksRepository) -> BooksService {
        BooksService::new(Arc::new(repo))
    }

    fn dune() -> BookInput {
        BookInput {
            name: "Dune".into(),
            category_id: 2,
        }
    }

    #[tokio::test]
    async fn create_returns_generated_id() {
        let mut repo = MockBooksRepository::new();
        repo.expect_insert()
            .withf(|data, created_at| {
                data.name == "Dune" && data.category_id == 2 && *created_at <= timestamp::now()
            })
            .times(1)
            .returning(|_, _| Ok(Some(42)));

        let id = service(repo).create(&dune()).await.unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn create_maps_insert_failure() {
        let mut repo = MockBooksRepository::new();
        repo.expect_insert()
            .returning(|_, _| Err(sqlx::Error::PoolTimedOut));

        let err = service(repo).create(&dune()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(ref msg) if msg == BOOK_NOT_STORED));
    }

    #[tokio::test]
    async fn create_maps_missing_id() {
        let mut repo = MockBooksRepository::new();
        repo.expect_insert().returning(|_, _| Ok(None));

        let err = service(repo).create(&dune()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(ref msg) if msg == LAST_INSERT_ID_NOT_FOUND));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let mut repo = MockBooksRepository::new();
        repo.expect_update()
            .withf(|id, data, _| *id == 9 && data.name == "Dune")
            .returning(|_, _, _| Ok(0));

        let err = service(repo).update(9, &dune()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_existing_row() {
        let mut repo = MockBooksRepository::new();
        repo.expect_update().returning(|_, _, _| Ok(1));

        assert!(service(repo).update(1, &dune()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_reports_missing_row() {
        let mut repo = MockBooksRepository::new();
        repo.expect_delete().with(eq(5)).returning(|_| Ok(1));
        repo.expect_delete().with(eq(6)).returning(|_| Ok(0));
        let service = service(repo);

        assert!(service.delete(5).await.is_ok());
        assert!(matches!(
            service.delete(6).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
