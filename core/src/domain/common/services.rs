/// Application service backing every exposed operation. Stateless per call;
/// all state lives behind the repository.
#[derive(Debug, Clone)]
pub struct Service<R> {
    pub deal_item_repository: R,
    pub self_party_id: i64,
}

impl<R> Service<R> {
    pub fn new(deal_item_repository: R, self_party_id: i64) -> Self {
        Self {
            deal_item_repository,
            self_party_id,
        }
    }
}
