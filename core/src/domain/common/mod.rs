pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct TradebookConfig {
    pub ledger: LedgerConfig,
}

#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Counterparty id this installation trades as. Last-price lookups
    /// resolve "sale" and "purchase" relative to it.
    pub self_party_id: i64,
}
