use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::invoice::OrderItemsGroup;
use crate::domain::order::NewOrder;
use crate::domain::order_item::{
    now_truncated, InsertManyResult, OrderItem, OrderItemPack, OrderItemUpdate, StagedOrderItem,
    UpdateResult,
};
use crate::domain::ports::{OrderCreator, OrderItemRepository};

use super::aggregation::{items_by_order, JoinSource};

#[derive(Clone)]
pub struct OrderItemService {
    repo: Arc<dyn OrderItemRepository>,
    orders: Arc<dyn OrderCreator>,
    upsert_on_miss: bool,
}

impl OrderItemService {
    pub fn new(
        repo: Arc<dyn OrderItemRepository>,
        orders: Arc<dyn OrderCreator>,
        upsert_on_miss: bool,
    ) -> Self {
        Self {
            repo,
            orders,
            upsert_on_miss,
        }
    }

    pub fn list_order_items(&self) -> Result<Vec<OrderItem>, DomainError> {
        self.repo.list()
    }

    /// Looks an item up by the `order_item_id` written at creation.
    pub fn get_order_item(&self, order_item_id: &str) -> Result<OrderItem, DomainError> {
        self.repo
            .find_by_order_item_id(order_item_id)?
            .ok_or(DomainError::NotFound)
    }

    /// Loads the rows the aggregation joins across and runs it for `order_id`.
    pub fn items_by_order(&self, order_id: &str) -> Result<Vec<OrderItemsGroup>, DomainError> {
        let items = self.repo.find_by_order(order_id)?;

        let food_ids = distinct(items.iter().filter_map(|i| i.food_id.as_deref()));
        let foods = self.repo.find_foods(&food_ids)?;

        let order_ids = distinct(items.iter().filter_map(|i| i.order_id.as_deref()));
        let orders = self.repo.find_orders(&order_ids)?;

        let table_ids = distinct(orders.iter().filter_map(|o| o.table_id.as_deref()));
        let tables = self.repo.find_tables(&table_ids)?;

        Ok(items_by_order(
            order_id,
            &JoinSource {
                items: &items,
                foods: &foods,
                orders: &orders,
                tables: &tables,
            },
        ))
    }

    /// Explodes a pack into one new order plus one item per draft.
    ///
    /// Drafts are validated in order and the first failure aborts the request
    /// before anything is written. The order and the items are two separate
    /// writes; a failed insert leaves the order behind.
    pub fn create_order_items(&self, pack: OrderItemPack) -> Result<InsertManyResult, DomainError> {
        if pack.order_items.is_empty() {
            return Err(DomainError::InvalidInput(
                "order_items must contain at least one item".to_string(),
            ));
        }

        let staged = pack
            .order_items
            .into_iter()
            .map(|draft| draft.stage())
            .collect::<Result<Vec<StagedOrderItem>, DomainError>>()?;

        let now = now_truncated();
        let order_id = self.orders.create_order(NewOrder {
            table_id: pack.table_id,
            order_date: now,
        })?;

        let items: Vec<OrderItem> = staged
            .into_iter()
            .map(|s| s.into_order_item(&order_id, now))
            .collect();
        let count = items.len();

        let result = self.repo.insert_many(items)?;
        log::info!("Created order {} with {} order items", order_id, count);
        Ok(result)
    }

    pub fn update_order_item(
        &self,
        order_item_id: &str,
        update: OrderItemUpdate,
    ) -> Result<UpdateResult, DomainError> {
        let patch = update.into_patch(now_truncated())?;
        let result = self
            .repo
            .update_one(order_item_id, patch, self.upsert_on_miss)?;
        if let Some(upserted) = &result.upserted_id {
            log::warn!(
                "Update of unknown order item {} created partial record {}",
                order_item_id,
                upserted
            );
        }
        Ok(result)
    }
}

fn distinct<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    ids.map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
