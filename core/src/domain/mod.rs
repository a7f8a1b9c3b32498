pub mod common;
pub mod deal_item;
