pub mod deal_item;
pub mod health;
pub mod server;
