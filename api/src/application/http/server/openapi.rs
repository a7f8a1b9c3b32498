use utoipa::OpenApi;

use crate::application::http::deal_item::router::DealItemApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tradebook API",
        description = "Deal-item query and price-resolution service"
    ),
    tags((name = "deal_item", description = "Deal item operations"))
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Full document including every router's paths.
    pub fn build() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.merge(DealItemApiDoc::openapi());
        doc
    }
}
