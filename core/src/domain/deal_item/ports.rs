use rust_decimal::Decimal;

use crate::domain::{
    common::entities::app_errors::CoreError,
    deal_item::{
        entities::{DealItem, DealItemWithDeal, DealItemWithMaterial, Page},
        query::{FilterSpec, SortSpec},
        value_objects::{CreateDealItemInput, MaterialDealItemsQuery, UpdateDealItemInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait DealItemService: Send + Sync {
    /// Every item of one deal, joined with its material, ordered by id
    /// ascending. An unknown deal yields an empty sequence, not an error.
    fn get_deal_items_of_deal(
        &self,
        deal_id: i64,
    ) -> impl Future<Output = Result<Vec<DealItemWithMaterial>, CoreError>> + Send;

    fn get_deal_item(
        &self,
        deal_item_id: i64,
    ) -> impl Future<Output = Result<DealItem, CoreError>> + Send;

    fn create_deal_item(
        &self,
        input: CreateDealItemInput,
    ) -> impl Future<Output = Result<DealItem, CoreError>> + Send;

    fn update_deal_item(
        &self,
        input: UpdateDealItemInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Removes the item and returns the removed record.
    fn delete_deal_item(
        &self,
        deal_item_id: i64,
    ) -> impl Future<Output = Result<DealItem, CoreError>> + Send;

    /// Unit price of the most recent sale of the material by the configured
    /// self party; zero when no prior sale exists.
    fn get_last_sale_price(
        &self,
        material_id: i64,
    ) -> impl Future<Output = Result<Decimal, CoreError>> + Send;

    /// Unit price of the most recent purchase of the material by the
    /// configured self party; zero when no prior purchase exists.
    fn get_last_purchase_price(
        &self,
        material_id: i64,
    ) -> impl Future<Output = Result<Decimal, CoreError>> + Send;

    fn get_deal_items_of_material(
        &self,
        query: MaterialDealItemsQuery,
    ) -> impl Future<Output = Result<Page<DealItemWithDeal>, CoreError>> + Send;
}

/// Narrow interface of the storage collaborator. Sort and filter reach it
/// only as resolved specs, never as strings.
#[cfg_attr(test, mockall::automock)]
pub trait DealItemRepository: Send + Sync {
    fn get_deal_item(
        &self,
        deal_item_id: i64,
    ) -> impl Future<Output = Result<Option<DealItem>, CoreError>> + Send;

    fn list_by_deal(
        &self,
        deal_id: i64,
    ) -> impl Future<Output = Result<Vec<DealItemWithMaterial>, CoreError>> + Send;

    /// Joined, filtered, ordered slice of the deal-item/deal join.
    fn query_joined(
        &self,
        filter: FilterSpec,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<DealItemWithDeal>, CoreError>> + Send;

    fn count_joined(
        &self,
        filter: FilterSpec,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn insert(
        &self,
        input: CreateDealItemInput,
    ) -> impl Future<Output = Result<DealItem, CoreError>> + Send;

    fn replace(
        &self,
        deal_item_id: i64,
        deal_item: DealItem,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete(
        &self,
        deal_item_id: i64,
    ) -> impl Future<Output = Result<Option<DealItem>, CoreError>> + Send;
}
