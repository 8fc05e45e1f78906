use super::errors::DomainError;
use super::order::{Food, NewOrder, Order, Table};
use super::order_item::{InsertManyResult, OrderItem, OrderItemPatch, UpdateResult};

/// The order-item collection together with the read-only lookups the
/// aggregation joins against.
pub trait OrderItemRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<OrderItem>, DomainError>;
    fn find_by_order_item_id(&self, order_item_id: &str)
        -> Result<Option<OrderItem>, DomainError>;
    fn find_by_order(&self, order_id: &str) -> Result<Vec<OrderItem>, DomainError>;
    fn insert_many(&self, items: Vec<OrderItem>) -> Result<InsertManyResult, DomainError>;
    /// Applies `patch` to the item keyed by `order_item_id`. On a miss with
    /// `upsert` set, a new partial item carrying only the patched fields is stored.
    fn update_one(
        &self,
        order_item_id: &str,
        patch: OrderItemPatch,
        upsert: bool,
    ) -> Result<UpdateResult, DomainError>;

    fn find_foods(&self, food_ids: &[String]) -> Result<Vec<Food>, DomainError>;
    fn find_orders(&self, order_ids: &[String]) -> Result<Vec<Order>, DomainError>;
    fn find_tables(&self, table_ids: &[String]) -> Result<Vec<Table>, DomainError>;
}

/// Creates the parent order of a pack and hands back its identifier.
pub trait OrderCreator: Send + Sync + 'static {
    fn create_order(&self, order: NewOrder) -> Result<String, DomainError>;
}
