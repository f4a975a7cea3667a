//! Seed data for an empty book store
//!
//! Runs once at startup, before the first request is served. A store that
//! already holds rows is left untouched, so restarts against persistent
//! storage do not duplicate the samples. Failure here aborts startup.

use crate::{
    error::AppResult,
    models::BookPayload,
    repository::BookStore,
};

/// Sample rows inserted into an empty store
const SEED_BOOKS: [(&str, &str); 2] = [
    ("The Time Machine", "time-machine.jpg"),
    ("The War of the Worlds", "war-of-the-worlds.jpg"),
];

/// Populate the store with sample books if it is empty
pub async fn initialize(store: &dyn BookStore) -> AppResult<()> {
    if store.count().await? > 0 {
        tracing::debug!("Book store already populated, skipping seed");
        return Ok(());
    }

    for (title, image) in SEED_BOOKS {
        store
            .add(BookPayload {
                title: title.to_string(),
                image: image.to_string(),
            })
            .await?;
    }

    tracing::info!("Seeded {} sample books", SEED_BOOKS.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryBookStore;

    #[tokio::test]
    async fn seeds_an_empty_store() {
        let store = MemoryBookStore::new();
        initialize(&store).await.unwrap();

        let books = store.list_all().await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "The Time Machine");
        assert_eq!(books[1].id, 2);
        assert_eq!(books[1].title, "The War of the Worlds");
    }

    #[tokio::test]
    async fn does_not_reseed_a_populated_store() {
        let store = MemoryBookStore::new();
        initialize(&store).await.unwrap();
        initialize(&store).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn leaves_existing_rows_alone() {
        let store = MemoryBookStore::new();
        store
            .add(BookPayload {
                title: "Already here".to_string(),
                image: "here.jpg".to_string(),
            })
            .await
            .unwrap();

        initialize(&store).await.unwrap();

        let books = store.list_all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Already here");
    }
}
