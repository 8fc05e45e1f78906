pub mod memory;
pub mod models;
pub mod order_item_repo;
