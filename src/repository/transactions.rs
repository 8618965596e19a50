//! Borrowing transactions repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::transaction::{CreateTransaction, Transaction, UpdateTransaction},
};

const SELECT_TRANSACTION: &str =
    "SELECT id, book_id, borrower_name, borrow_date, transaction_date FROM transactions";

#[derive(Clone)]
pub struct TransactionsRepository {
    pool: Pool<Postgres>,
}

impl TransactionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all transactions
    pub async fn list(&self) -> AppResult<Vec<Transaction>> {
        let query = format!("{} ORDER BY id", SELECT_TRANSACTION);
        let rows = sqlx::query_as::<_, Transaction>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get transaction by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Transaction> {
        let query = format!("{} WHERE id = $1", SELECT_TRANSACTION);
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))
    }

    /// Record a new transaction.
    ///
    /// `borrow_date` falls back to the current date; `transaction_date` is
    /// always the current date.
    pub async fn create(&self, data: &CreateTransaction) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO transactions (book_id, borrower_name, borrow_date, transaction_date)
            VALUES ($1, $2, COALESCE($3, CURRENT_DATE), CURRENT_DATE)
            RETURNING id
            "#,
        )
        .bind(data.book_id)
        .bind(&data.borrower_name)
        .bind(data.borrow_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Update the fields present in `data`, keeping the others
    pub async fn update(&self, id: i32, data: &UpdateTransaction) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET book_id = COALESCE($1, book_id),
                borrower_name = COALESCE($2, borrower_name),
                borrow_date = COALESCE($3, borrow_date),
                transaction_date = CASE WHEN $4 THEN $5 ELSE transaction_date END
            WHERE id = $6
            "#,
        )
        .bind(data.book_id)
        .bind(&data.borrower_name)
        .bind(data.borrow_date)
        .bind(data.transaction_date.is_some())
        .bind(data.transaction_date.flatten())
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }
        Ok(())
    }
}
