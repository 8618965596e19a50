//! Data models for Libris

pub mod book;
pub mod borrower;
pub mod date;
pub mod transaction;

// Re-export commonly used types
pub use book::{Book, BookRequest};
pub use borrower::{Borrower, BorrowerRequest};
pub use transaction::{CreateTransaction, Transaction, UpdateTransaction};
