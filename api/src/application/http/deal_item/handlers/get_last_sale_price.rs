use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::ports::DealItemService;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LastSalePriceResponse {
    pub data: Decimal,
}

#[utoipa::path(
    get,
    path = "/materials/{material_id}/last-sale-price",
    tag = "deal_item",
    summary = "Last sale price of a material",
    description = "Unit price of the most recent sale by the configured self party; zero when no prior sale exists.",
    params(("material_id" = i64, Path, description = "Material id")),
    responses((status = 200, body = LastSalePriceResponse)),
)]
pub async fn get_last_sale_price(
    Path(material_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<LastSalePriceResponse>, ApiError> {
    let price = state
        .service
        .get_last_sale_price(material_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LastSalePriceResponse { data: price }))
}
