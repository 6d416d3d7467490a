//! Item persistence

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Item;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(u64),
}

/// Capability interface over item records
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item and return it with its assigned id
    async fn create(&self, item: Item) -> Item;

    async fn find_by_id(&self, id: u64) -> Option<Item>;

    /// All items ordered by id
    async fn find_all(&self) -> Vec<Item>;

    /// Replace the stored record's values with those of `item`
    async fn update(&self, id: u64, item: Item) -> Result<Item, StoreError>;

    async fn clear(&self);
}

/// In-memory store backed by an ordered map
#[derive(Debug)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<u64, Item>>,
    sequence: AtomicU64,
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Store pre-populated with the two demo items
    pub async fn with_seed_data() -> Self {
        let store = Self::new();
        store.create(Item::new("itemA", 10000, 10)).await;
        store.create(Item::new("itemB", 20000, 20)).await;
        store
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, mut item: Item) -> Item {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        item.id = Some(id);

        self.items.write().await.insert(id, item.clone());
        tracing::debug!(item_id = id, "item stored");
        item
    }

    async fn find_by_id(&self, id: u64) -> Option<Item> {
        self.items.read().await.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<Item> {
        self.items.read().await.values().cloned().collect()
    }

    async fn update(&self, id: u64, item: Item) -> Result<Item, StoreError> {
        let mut items = self.items.write().await;
        let stored = items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        stored.apply(&item);
        tracing::debug!(item_id = id, "item updated");
        Ok(stored.clone())
    }

    async fn clear(&self) {
        self.items.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryItemStore::new();

        let first = store.create(Item::new("a", 1000, 10)).await;
        let second = store.create(Item::new("b", 2000, 10)).await;

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.find_by_id(2).await, Some(second));
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let store = InMemoryItemStore::with_seed_data().await;
        store.create(Item::new("itemC", 30000, 1)).await;

        let names: Vec<_> = store
            .find_all()
            .await
            .into_iter()
            .map(|item| item.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["itemA", "itemB", "itemC"]);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let store = InMemoryItemStore::new();
        let result = store.update(42, Item::new("x", 1000, 10)).await;
        assert_eq!(result, Err(StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn update_replaces_stored_values() {
        let store = InMemoryItemStore::with_seed_data().await;

        let updated = store
            .update(
                1,
                Item {
                    id: None,
                    name: Some("renamed".into()),
                    price: Some(5000),
                    quantity: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name.as_deref(), Some("renamed"));
        assert_eq!(updated.price, Some(5000));
        assert_eq!(updated.quantity, None);
        assert_eq!(store.find_by_id(1).await, Some(updated));
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemoryItemStore::with_seed_data().await;
        assert_eq!(store.len().await, 2);

        store.clear().await;
        assert!(store.is_empty().await);
        assert!(store.find_by_id(1).await.is_none());
    }
}
