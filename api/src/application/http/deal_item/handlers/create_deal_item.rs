use axum::Json;
use axum::extract::State;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::entities::DealItem;
use tradebook_core::domain::deal_item::ports::DealItemService;
use tradebook_core::domain::deal_item::value_objects::CreateDealItemInput;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDealItemRequest {
    pub deal_id: i64,
    pub material_id: i64,
    pub price_per_one: Decimal,
    pub quantity: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateDealItemResponse {
    pub data: DealItem,
}

#[utoipa::path(
    post,
    path = "/deal-items",
    tag = "deal_item",
    summary = "Create a deal item",
    description = "Creates a deal item; id and timestamp are storage-assigned.",
    request_body = CreateDealItemRequest,
    responses((status = 201, body = CreateDealItemResponse)),
)]
pub async fn create_deal_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateDealItemRequest>,
) -> Result<Response<CreateDealItemResponse>, ApiError> {
    let item = state
        .service
        .create_deal_item(CreateDealItemInput {
            deal_id: payload.deal_id,
            material_id: payload.material_id,
            price_per_one: payload.price_per_one,
            quantity: payload.quantity,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateDealItemResponse { data: item }))
}
