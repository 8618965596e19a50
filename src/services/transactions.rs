//! Borrowing transactions service

use crate::{
    error::AppResult,
    models::transaction::{CreateTransaction, Transaction, UpdateTransaction},
    repository::Repository,
};

#[derive(Clone)]
pub struct TransactionsService {
    repository: Repository,
}

impl TransactionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Transaction>> {
        self.repository.transactions.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Transaction> {
        self.repository.transactions.get_by_id(id).await
    }

    /// Record a borrowing
    pub async fn create(&self, data: &CreateTransaction) -> AppResult<i32> {
        let id = self.repository.transactions.create(data).await?;
        tracing::info!(transaction_id = id, book_id = ?data.book_id, "Transaction recorded");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &UpdateTransaction) -> AppResult<()> {
        self.repository.transactions.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.transactions.delete(id).await
    }
}
