//! Borrowers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, BorrowerRequest},
};

#[derive(Clone)]
pub struct BorrowersRepository {
    pool: Pool<Postgres>,
}

impl BorrowersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all borrowers
    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        let rows = sqlx::query_as::<_, Borrower>(
            "SELECT id, name, contact FROM borrowers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get borrower by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>("SELECT id, name, contact FROM borrowers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Borrower not found".to_string()))
    }

    pub async fn create(&self, data: &BorrowerRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO borrowers (name, contact) VALUES ($1, $2) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.contact)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &BorrowerRequest) -> AppResult<()> {
        let result = sqlx::query("UPDATE borrowers SET name = $1, contact = $2 WHERE id = $3")
            .bind(&data.name)
            .bind(&data.contact)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Borrower not found".to_string()));
        }
        Ok(())
    }

    /// Delete a borrower. Transactions keep their copied borrower name.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM borrowers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Borrower not found".to_string()));
        }
        Ok(())
    }
}
