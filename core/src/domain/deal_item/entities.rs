use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::deal_item::query::{DealColumn, Field, FieldSource, FieldValue, ItemColumn};

/// One material line within a commercial deal: quantity at a unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DealItem {
    pub id: i64,
    pub deal_id: i64,
    pub material_id: i64,
    pub price_per_one: Decimal,
    pub quantity: Decimal,
    /// Row creation time, assigned by storage.
    pub timestamp: DateTime<Utc>,
}

/// Denormalized counterparty display data carried on a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Party {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Deal {
    pub id: i64,
    pub seller_id: i64,
    pub buyer_id: i64,
    /// Business transaction time, distinct from the row timestamp.
    pub deal_time: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
    pub deal_price_id: i64,
    pub deal_payment_id: i64,
    pub buyer: Option<Party>,
    pub seller: Option<Party>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Material {
    pub id: i64,
    pub name: String,
}

/// Deal item joined to its parent deal; the row shape of the material
/// listing and of price resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DealItemWithDeal {
    #[serde(flatten)]
    pub item: DealItem,
    pub deal: Deal,
}

/// Deal item joined to its material; the row shape of the per-deal listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DealItemWithMaterial {
    #[serde(flatten)]
    pub item: DealItem,
    pub material: Material,
}

/// One slice of a larger result set, with enough metadata to page through
/// the rest of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl FieldSource for DealItemWithDeal {
    fn field_value(&self, field: Field) -> FieldValue {
        match field {
            Field::Item(column) => match column {
                ItemColumn::Id => FieldValue::Int(self.item.id),
                ItemColumn::DealId => FieldValue::Int(self.item.deal_id),
                ItemColumn::MaterialId => FieldValue::Int(self.item.material_id),
                ItemColumn::PricePerOne => FieldValue::Decimal(self.item.price_per_one),
                ItemColumn::Quantity => FieldValue::Decimal(self.item.quantity),
                ItemColumn::Timestamp => FieldValue::Time(self.item.timestamp),
            },
            Field::Deal(column) => match column {
                DealColumn::Id => FieldValue::Int(self.deal.id),
                DealColumn::SellerId => FieldValue::Int(self.deal.seller_id),
                DealColumn::BuyerId => FieldValue::Int(self.deal.buyer_id),
                DealColumn::DealTime => FieldValue::Time(self.deal.deal_time),
                DealColumn::Timestamp => FieldValue::Time(self.deal.timestamp),
                DealColumn::DealPriceId => FieldValue::Int(self.deal.deal_price_id),
                DealColumn::DealPaymentId => FieldValue::Int(self.deal.deal_payment_id),
            },
        }
    }
}
