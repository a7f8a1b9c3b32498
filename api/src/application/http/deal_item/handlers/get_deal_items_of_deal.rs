use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::entities::DealItemWithMaterial;
use tradebook_core::domain::deal_item::ports::DealItemService;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDealItemsOfDealResponse {
    pub data: Vec<DealItemWithMaterial>,
}

#[utoipa::path(
    get,
    path = "/deals/{deal_id}/items",
    tag = "deal_item",
    summary = "List deal items of a deal",
    description = "Returns every deal item of the given deal, joined with its material, ordered by id. An unknown deal yields an empty list.",
    params(("deal_id" = i64, Path, description = "Deal id")),
    responses((status = 200, body = GetDealItemsOfDealResponse)),
)]
pub async fn get_deal_items_of_deal(
    Path(deal_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<GetDealItemsOfDealResponse>, ApiError> {
    let items = state
        .service
        .get_deal_items_of_deal(deal_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDealItemsOfDealResponse { data: items }))
}
