pub mod errors;
pub mod invoice;
pub mod order;
pub mod order_item;
pub mod ports;
