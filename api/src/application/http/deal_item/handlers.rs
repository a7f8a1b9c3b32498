pub mod create_deal_item;
pub mod delete_deal_item;
pub mod get_deal_item;
pub mod get_deal_items_of_deal;
pub mod get_deal_items_of_material;
pub mod get_last_purchase_price;
pub mod get_last_sale_price;
pub mod update_deal_item;
