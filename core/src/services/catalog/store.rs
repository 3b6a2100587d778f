use tokio::sync::RwLock;

use crate::domain::entities::item::{Item, ItemPage, ItemRecord};
use crate::errors::CatalogError;

/// Items addressed by their insertion index. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: RwLock<Vec<ItemRecord>>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: usize) -> Result<ItemRecord, CatalogError> {
        self.items
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }

    /// Items `skip..skip + limit` plus the total count
    pub async fn list(&self, skip: usize, limit: usize) -> ItemPage {
        let items = self.items.read().await;
        ItemPage {
            items: items.iter().skip(skip).take(limit).cloned().collect(),
            total: items.len(),
        }
    }

    /// Appends an item; its id is the previous length
    pub async fn create(&self, item: Item) -> ItemRecord {
        let record = ItemRecord::from(item);
        let mut items = self.items.write().await;
        items.push(record.clone());
        tracing::debug!(id = items.len() - 1, "item created");
        record
    }

    pub async fn update(&self, id: usize, item: Item) -> Result<ItemRecord, CatalogError> {
        let mut items = self.items.write().await;
        let slot = items.get_mut(id).ok_or(CatalogError::NotFound { id })?;
        *slot = ItemRecord::from(item);
        Ok(slot.clone())
    }
}
