//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookRequest},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_date FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_date FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Insert a book and return its generated ID
    pub async fn create(&self, data: &BookRequest) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (title, author, published_date)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.published_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replace every field of a book
    pub async fn update(&self, id: i32, data: &BookRequest) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE books SET title = $1, author = $2, published_date = $3 WHERE id = $4",
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.published_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }

    /// Delete a book together with every transaction that references it.
    ///
    /// Both deletes run in one database transaction; returns the number of
    /// transactions removed.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let detached = sqlx::query("DELETE FROM transactions WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        tx.commit().await?;
        Ok(detached)
    }
}
