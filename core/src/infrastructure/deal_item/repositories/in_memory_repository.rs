use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    deal_item::{
        entities::{Deal, DealItem, DealItemWithDeal, DealItemWithMaterial, Material},
        ports::DealItemRepository,
        query::{FilterSpec, SortSpec},
        value_objects::CreateDealItemInput,
    },
};

/// Reference storage adapter. Referential integrity is this layer's
/// responsibility; joins exclude rows whose parent records are absent
/// rather than fabricating defaults for them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDealStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    deal_items: BTreeMap<i64, DealItem>,
    deals: BTreeMap<i64, Deal>,
    materials: BTreeMap<i64, Material>,
    last_deal_item_id: i64,
}

impl InMemoryDealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a parent deal. Deal management is another subsystem's surface;
    /// the store only has to hold the rows for joins.
    pub fn insert_deal(&self, deal: Deal) -> Result<(), CoreError> {
        self.write()?.deals.insert(deal.id, deal);
        Ok(())
    }

    pub fn insert_material(&self, material: Material) -> Result<(), CoreError> {
        self.write()?.materials.insert(material.id, material);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner>, CoreError> {
        self.inner.read().map_err(|e| {
            error!("deal store lock poisoned: {e}");
            CoreError::InternalServerError
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, CoreError> {
        self.inner.write().map_err(|e| {
            error!("deal store lock poisoned: {e}");
            CoreError::InternalServerError
        })
    }

    fn joined_rows(&self, filter: &FilterSpec) -> Result<Vec<DealItemWithDeal>, CoreError> {
        let inner = self.read()?;
        Ok(inner
            .deal_items
            .values()
            .filter_map(|item| {
                inner.deals.get(&item.deal_id).map(|deal| DealItemWithDeal {
                    item: item.clone(),
                    deal: deal.clone(),
                })
            })
            .filter(|row| filter.matches(row))
            .collect())
    }
}

impl DealItemRepository for InMemoryDealStore {
    async fn get_deal_item(&self, deal_item_id: i64) -> Result<Option<DealItem>, CoreError> {
        Ok(self.read()?.deal_items.get(&deal_item_id).cloned())
    }

    async fn list_by_deal(&self, deal_id: i64) -> Result<Vec<DealItemWithMaterial>, CoreError> {
        let inner = self.read()?;
        // BTreeMap iteration is already id-ascending.
        Ok(inner
            .deal_items
            .values()
            .filter(|item| item.deal_id == deal_id)
            .filter_map(|item| {
                inner
                    .materials
                    .get(&item.material_id)
                    .map(|material| DealItemWithMaterial {
                        item: item.clone(),
                        material: material.clone(),
                    })
            })
            .collect())
    }

    async fn query_joined(
        &self,
        filter: FilterSpec,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<DealItemWithDeal>, CoreError> {
        let mut rows = self.joined_rows(&filter)?;
        rows.sort_by(|a, b| sort.compare(a, b));
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_joined(&self, filter: FilterSpec) -> Result<u64, CoreError> {
        Ok(self.joined_rows(&filter)?.len() as u64)
    }

    async fn insert(&self, input: CreateDealItemInput) -> Result<DealItem, CoreError> {
        let mut inner = self.write()?;
        inner.last_deal_item_id += 1;
        let item = DealItem {
            id: inner.last_deal_item_id,
            deal_id: input.deal_id,
            material_id: input.material_id,
            price_per_one: input.price_per_one,
            quantity: input.quantity,
            timestamp: Utc::now(),
        };
        inner.deal_items.insert(item.id, item.clone());
        Ok(item)
    }

    // Row races cannot occur under the process-wide lock; the port still
    // carries ConcurrencyConflict for engines that detect them.
    async fn replace(&self, deal_item_id: i64, mut deal_item: DealItem) -> Result<(), CoreError> {
        let mut inner = self.write()?;
        if !inner.deal_items.contains_key(&deal_item_id) {
            return Err(CoreError::NotFound);
        }
        deal_item.id = deal_item_id;
        inner.deal_items.insert(deal_item_id, deal_item);
        Ok(())
    }

    async fn delete(&self, deal_item_id: i64) -> Result<Option<DealItem>, CoreError> {
        Ok(self.write()?.deal_items.remove(&deal_item_id))
    }
}
