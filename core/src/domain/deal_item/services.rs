use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    deal_item::{
        entities::{DealItem, DealItemWithDeal, DealItemWithMaterial, Page},
        ports::{DealItemRepository, DealItemService},
        query::{DealColumn, Field, FieldValue, FilterClause, FilterSpec, ItemColumn, SortSpec},
        value_objects::{CreateDealItemInput, MaterialDealItemsQuery, UpdateDealItemInput},
    },
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 10;

impl<R: DealItemRepository> DealItemService for Service<R> {
    async fn get_deal_items_of_deal(
        &self,
        deal_id: i64,
    ) -> Result<Vec<DealItemWithMaterial>, CoreError> {
        self.deal_item_repository.list_by_deal(deal_id).await
    }

    async fn get_deal_item(&self, deal_item_id: i64) -> Result<DealItem, CoreError> {
        self.deal_item_repository
            .get_deal_item(deal_item_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn create_deal_item(&self, input: CreateDealItemInput) -> Result<DealItem, CoreError> {
        self.deal_item_repository.insert(input).await
    }

    async fn update_deal_item(&self, input: UpdateDealItemInput) -> Result<(), CoreError> {
        if input.deal_item_id != input.deal_item.id {
            return Err(CoreError::Invalid(
                "payload id does not match the targeted id".to_string(),
            ));
        }

        match self
            .deal_item_repository
            .replace(input.deal_item_id, input.deal_item)
            .await
        {
            Err(CoreError::ConcurrencyConflict) => {
                // A race lost against a delete is reported as the record
                // being gone; anything else stays a conflict for the caller.
                match self
                    .deal_item_repository
                    .get_deal_item(input.deal_item_id)
                    .await?
                {
                    None => Err(CoreError::NotFound),
                    Some(_) => Err(CoreError::ConcurrencyConflict),
                }
            }
            other => other,
        }
    }

    async fn delete_deal_item(&self, deal_item_id: i64) -> Result<DealItem, CoreError> {
        self.deal_item_repository
            .delete(deal_item_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn get_last_sale_price(&self, material_id: i64) -> Result<Decimal, CoreError> {
        self.last_price(Field::Deal(DealColumn::SellerId), material_id)
            .await
    }

    async fn get_last_purchase_price(&self, material_id: i64) -> Result<Decimal, CoreError> {
        self.last_price(Field::Deal(DealColumn::BuyerId), material_id)
            .await
    }

    async fn get_deal_items_of_material(
        &self,
        query: MaterialDealItemsQuery,
    ) -> Result<Page<DealItemWithDeal>, CoreError> {
        let page = query.page.unwrap_or(DEFAULT_PAGE);
        let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if page < 1 || per_page < 1 {
            return Err(CoreError::InvalidPageSpec(format!(
                "page {page} and perPage {per_page} must both be at least 1"
            )));
        }

        // Both specs are resolved before any storage access.
        let sort = SortSpec::parse(query.sort.as_deref().unwrap_or_default())?;
        let filter = FilterSpec::parse(query.filter.as_deref().unwrap_or_default())?.and(
            FilterClause::eq(
                Field::Item(ItemColumn::MaterialId),
                FieldValue::Int(query.material_id),
            ),
        );

        let offset = u64::from(page - 1) * u64::from(per_page);
        let total = self.deal_item_repository.count_joined(filter.clone()).await?;
        let items = self
            .deal_item_repository
            .query_joined(filter, sort, offset, u64::from(per_page))
            .await?;
        debug!(page, per_page, total, "resolved material listing");

        Ok(Page {
            page,
            per_page,
            total,
            items,
        })
    }
}

impl<R: DealItemRepository> Service<R> {
    /// Price of the most recent deal item whose parent deal has the self
    /// party on the given side. Equal deal times fall back to the lowest
    /// item id so the result is deterministic; no candidate resolves to
    /// zero, which callers read as "no prior price".
    async fn last_price(
        &self,
        counterparty_field: Field,
        material_id: i64,
    ) -> Result<Decimal, CoreError> {
        let filter = FilterSpec::default()
            .and(FilterClause::eq(
                counterparty_field,
                FieldValue::Int(self.self_party_id),
            ))
            .and(FilterClause::eq(
                Field::Item(ItemColumn::MaterialId),
                FieldValue::Int(material_id),
            ));

        let candidates = self
            .deal_item_repository
            .query_joined(filter, SortSpec::most_recent_first(), 0, 1)
            .await?;

        Ok(candidates
            .first()
            .map(|row| row.item.price_per_one)
            .unwrap_or(Decimal::ZERO))
    }
}
