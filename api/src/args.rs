use clap::Parser;
use tradebook_core::domain::common::{LedgerConfig, TradebookConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "tradebook-api", about = "Deal-item query and price-resolution service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ledger: LedgerArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LedgerArgs {
    /// Counterparty id this installation trades as; last-price lookups
    /// resolve "sale" and "purchase" relative to it.
    #[arg(long, env = "SELF_PARTY_ID", default_value_t = 1)]
    pub self_party_id: i64,
}

impl From<Args> for TradebookConfig {
    fn from(args: Args) -> Self {
        Self {
            ledger: LedgerConfig {
                self_party_id: args.ledger.self_party_id,
            },
        }
    }
}
