use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::entities::DealItem;
use tradebook_core::domain::deal_item::ports::DealItemService;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteDealItemResponse {
    pub data: DealItem,
}

#[utoipa::path(
    delete,
    path = "/deal-items/{deal_item_id}",
    tag = "deal_item",
    summary = "Delete a deal item",
    description = "Removes the item and returns the removed record.",
    params(("deal_item_id" = i64, Path, description = "Deal item id")),
    responses(
        (status = 200, body = DeleteDealItemResponse),
        (status = 404, description = "Deal item not found")
    ),
)]
pub async fn delete_deal_item(
    Path(deal_item_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<DeleteDealItemResponse>, ApiError> {
    let removed = state
        .service
        .delete_deal_item(deal_item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteDealItemResponse { data: removed }))
}
