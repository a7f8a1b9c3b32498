use axum::{
    Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use super::handlers::create_deal_item::{__path_create_deal_item, create_deal_item};
use super::handlers::delete_deal_item::{__path_delete_deal_item, delete_deal_item};
use super::handlers::get_deal_item::{__path_get_deal_item, get_deal_item};
use super::handlers::get_deal_items_of_deal::{
    __path_get_deal_items_of_deal, get_deal_items_of_deal,
};
use super::handlers::get_deal_items_of_material::{
    __path_get_deal_items_of_material, get_deal_items_of_material,
};
use super::handlers::get_last_purchase_price::{
    __path_get_last_purchase_price, get_last_purchase_price,
};
use super::handlers::get_last_sale_price::{__path_get_last_sale_price, get_last_sale_price};
use super::handlers::update_deal_item::{__path_update_deal_item, update_deal_item};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    get_deal_items_of_deal,
    get_deal_item,
    create_deal_item,
    update_deal_item,
    delete_deal_item,
    get_deal_items_of_material,
    get_last_sale_price,
    get_last_purchase_price
))]
pub struct DealItemApiDoc;

pub fn deal_item_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();
    Router::new()
        .route(
            &format!("{root_path}/deals/{{deal_id}}/items"),
            get(get_deal_items_of_deal),
        )
        .route(
            &format!("{root_path}/deal-items/{{deal_item_id}}"),
            get(get_deal_item),
        )
        .route(&format!("{root_path}/deal-items"), post(create_deal_item))
        .route(
            &format!("{root_path}/deal-items/{{deal_item_id}}"),
            put(update_deal_item),
        )
        .route(
            &format!("{root_path}/deal-items/{{deal_item_id}}"),
            delete(delete_deal_item),
        )
        .route(
            &format!("{root_path}/materials/{{material_id}}/deal-items"),
            get(get_deal_items_of_material),
        )
        .route(
            &format!("{root_path}/materials/{{material_id}}/last-sale-price"),
            get(get_last_sale_price),
        )
        .route(
            &format!("{root_path}/materials/{{material_id}}/last-purchase-price"),
            get(get_last_purchase_price),
        )
}
