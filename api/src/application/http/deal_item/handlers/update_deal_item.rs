use axum::Json;
use axum::extract::{Path, State};
use tradebook_core::domain::deal_item::entities::DealItem;
use tradebook_core::domain::deal_item::ports::DealItemService;
use tradebook_core::domain::deal_item::value_objects::UpdateDealItemInput;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/deal-items/{deal_item_id}",
    tag = "deal_item",
    summary = "Replace a deal item",
    description = "Whole-record replacement. The payload id must match the path id.",
    params(("deal_item_id" = i64, Path, description = "Deal item id")),
    request_body = DealItem,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Payload id does not match the path id"),
        (status = 404, description = "Deal item not found"),
        (status = 409, description = "Concurrent update conflict")
    ),
)]
pub async fn update_deal_item(
    Path(deal_item_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<DealItem>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .update_deal_item(UpdateDealItemInput {
            deal_item_id,
            deal_item: payload,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
