pub mod deal_item;
