//! In-memory book store
//!
//! Default backend, used when no database connection string is configured.
//! State lives for the duration of the process only.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookPayload},
};

use super::BookStore;

struct Inner {
    books: BTreeMap<i32, Book>,
    // Ids mimic auto-increment columns: monotonic, never reused
    next_id: i32,
}

pub struct MemoryBookStore {
    inner: RwLock<Inner>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                books: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let inner = self.inner.read().await;
        Ok(inner.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Book> {
        let inner = self.inner.read().await;
        inner
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn add(&self, payload: BookPayload) -> AppResult<Book> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let book = Book {
            id,
            title: payload.title,
            image: payload.image,
        };
        inner.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update_fields(&self, id: i32, payload: BookPayload) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;
        book.title = payload.title;
        book.image = payload.image;
        Ok(())
    }

    async fn remove(&self, id: i32) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .books
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    async fn count(&self) -> AppResult<i64> {
        let inner = self.inner.read().await;
        Ok(inner.books.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, image: &str) -> BookPayload {
        BookPayload {
            title: title.to_string(),
            image: image.to_string(),
        }
    }

    #[tokio::test]
    async fn add_assigns_sequential_ids() {
        let store = MemoryBookStore::new();
        let first = store.add(payload("A", "a.jpg")).await.unwrap();
        let second = store.add(payload("B", "b.jpg")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let store = MemoryBookStore::new();
        let first = store.add(payload("A", "a.jpg")).await.unwrap();
        store.remove(first.id).await.unwrap();
        let second = store.add(payload("B", "b.jpg")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_overwrites_title_and_image_only() {
        let store = MemoryBookStore::new();
        let book = store.add(payload("A", "a.jpg")).await.unwrap();

        store
            .update_fields(book.id, payload("B", "b.jpg"))
            .await
            .unwrap();

        let updated = store.find_by_id(book.id).await.unwrap();
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.title, "B");
        assert_eq!(updated.image, "b.jpg");
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let store = MemoryBookStore::new();
        assert!(matches!(
            store.find_by_id(42).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.update_fields(42, payload("A", "a.jpg")).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.remove(42).await, Err(AppError::NotFound(_))));
    }
}
