//! Book model and request payload

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog entry. The id is assigned by storage on creation and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Unique identifier, assigned by the store
    pub id: i32,
    /// Book title
    pub title: String,
    /// Cover image URL or path
    pub image: String,
}

/// Request body for creating or updating a book. Any `id` field in the
/// incoming JSON is ignored; ids only come from the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookPayload {
    /// Book title
    pub title: String,
    /// Cover image URL or path
    pub image: String,
}
