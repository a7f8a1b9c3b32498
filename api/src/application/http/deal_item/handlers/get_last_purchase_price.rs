use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::ports::DealItemService;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LastPurchasePriceResponse {
    pub data: Decimal,
}

#[utoipa::path(
    get,
    path = "/materials/{material_id}/last-purchase-price",
    tag = "deal_item",
    summary = "Last purchase price of a material",
    description = "Unit price of the most recent purchase by the configured self party; zero when no prior purchase exists.",
    params(("material_id" = i64, Path, description = "Material id")),
    responses((status = 200, body = LastPurchasePriceResponse)),
)]
pub async fn get_last_purchase_price(
    Path(material_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<LastPurchasePriceResponse>, ApiError> {
    let price = state
        .service
        .get_last_purchase_price(material_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LastPurchasePriceResponse { data: price }))
}
