//! Storage layer for book persistence
//!
//! The HTTP handlers only ever see the [`BookStore`] trait; the concrete
//! backend (in-memory or PostgreSQL) is selected once at startup from the
//! configuration.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookPayload},
};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Backend-agnostic book storage contract
#[async_trait]
pub trait BookStore: Send + Sync {
    /// List all books. No ordering is guaranteed.
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    /// Get a book by id, or `NotFound`
    async fn find_by_id(&self, id: i32) -> AppResult<Book>;

    /// Persist a new book, assigning the next unique id
    async fn add(&self, payload: BookPayload) -> AppResult<Book>;

    /// Overwrite title and image of an existing book, or `NotFound`
    async fn update_fields(&self, id: i32, payload: BookPayload) -> AppResult<()>;

    /// Delete a book by id, or `NotFound`
    async fn remove(&self, id: i32) -> AppResult<()>;

    /// Number of stored books
    async fn count(&self) -> AppResult<i64>;
}
