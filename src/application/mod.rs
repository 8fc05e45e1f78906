pub mod aggregation;
pub mod order_item_service;
