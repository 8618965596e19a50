//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{Book, BookRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, data: &BookRequest) -> AppResult<i32> {
        let id = self.repository.books.create(data).await?;
        tracing::info!(book_id = id, "Book created");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BookRequest) -> AppResult<()> {
        self.repository.books.update(id, data).await
    }

    /// Delete a book and the transactions that reference it
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let detached = self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, transactions = detached, "Book deleted");
        Ok(())
    }
}
