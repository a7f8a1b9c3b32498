use crate::domain::common::{TradebookConfig, services::Service};
use crate::infrastructure::deal_item::repositories::InMemoryDealStore;

pub type TradebookService = Service<InMemoryDealStore>;

/// Wires the service against the reference in-memory store.
pub async fn create_service(config: TradebookConfig) -> Result<TradebookService, anyhow::Error> {
    let store = InMemoryDealStore::new();
    Ok(Service::new(store, config.ledger.self_party_id))
}
