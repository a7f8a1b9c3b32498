use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tradebook_core::domain::deal_item::entities::{DealItemWithDeal, Page};
use tradebook_core::domain::deal_item::ports::DealItemService;
use tradebook_core::domain::deal_item::value_objects::MaterialDealItemsQuery;
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DealItemsOfMaterialQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// `<field> [asc|desc]` over the allow-listed fields; deal fields are
    /// addressed as `deal.<field>`.
    pub sort: Option<String>,
    /// Comma-separated `field[ op ]value` clauses, conjunction semantics.
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDealItemsOfMaterialResponse {
    pub data: Page<DealItemWithDeal>,
}

#[utoipa::path(
    get,
    path = "/materials/{material_id}/deal-items",
    tag = "deal_item",
    summary = "List deal items of a material",
    description = "Pages through the deal items of a material, joined with their parent deals, under a client-supplied sort and filter.",
    params(
        ("material_id" = i64, Path, description = "Material id"),
        DealItemsOfMaterialQuery
    ),
    responses(
        (status = 200, body = GetDealItemsOfMaterialResponse),
        (status = 400, description = "Invalid sort, filter, or page specification")
    ),
)]
pub async fn get_deal_items_of_material(
    Path(material_id): Path<i64>,
    Query(query): Query<DealItemsOfMaterialQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetDealItemsOfMaterialResponse>, ApiError> {
    let page = state
        .service
        .get_deal_items_of_material(MaterialDealItemsQuery {
            material_id,
            page: query.page,
            per_page: query.per_page,
            sort: query.sort,
            filter: query.filter,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDealItemsOfMaterialResponse { data: page }))
}
