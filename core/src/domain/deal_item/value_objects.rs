use rust_decimal::Decimal;

use crate::domain::deal_item::entities::DealItem;

/// Payload for creating a deal item. Id and timestamp are storage-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDealItemInput {
    pub deal_id: i64,
    pub material_id: i64,
    pub price_per_one: Decimal,
    pub quantity: Decimal,
}

/// Whole-record replacement of an existing deal item. The targeted id and
/// the payload id must agree.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateDealItemInput {
    pub deal_item_id: i64,
    pub deal_item: DealItem,
}

/// Client-supplied parameters of the material listing, before resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialDealItemsQuery {
    pub material_id: i64,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}
