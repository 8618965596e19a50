//! Borrower management service

use crate::{
    error::AppResult,
    models::borrower::{Borrower, BorrowerRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowersService {
    repository: Repository,
}

impl BorrowersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        self.repository.borrowers.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Borrower> {
        self.repository.borrowers.get_by_id(id).await
    }

    pub async fn create(&self, data: &BorrowerRequest) -> AppResult<i32> {
        let id = self.repository.borrowers.create(data).await?;
        tracing::info!(borrower_id = id, "Borrower created");
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BorrowerRequest) -> AppResult<()> {
        self.repository.borrowers.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.borrowers.delete(id).await?;
        tracing::info!(borrower_id = id, "Borrower deleted");
        Ok(())
    }
}
