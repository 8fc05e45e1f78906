use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::domain::order::{Food, NewOrder, Order, Table};
use crate::domain::order_item::{
    new_object_id, InsertManyResult, OrderItem, OrderItemPatch, UpdateResult,
};
use crate::domain::ports::{OrderCreator, OrderItemRepository};

#[derive(Debug, Default)]
struct Collections {
    order_items: Vec<OrderItem>,
    orders: Vec<Order>,
    foods: Vec<Food>,
    tables: Vec<Table>,
}

/// Store kept entirely in process memory. Implements the same contract as the
/// PostgreSQL store; rows come back in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Mutex<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, DomainError> {
        self.data
            .lock()
            .map_err(|e| DomainError::Internal(format!("store lock poisoned: {}", e)))
    }

    pub fn insert_food(&self, food: Food) -> Result<(), DomainError> {
        self.lock()?.foods.push(food);
        Ok(())
    }

    pub fn insert_table(&self, table: Table) -> Result<(), DomainError> {
        self.lock()?.tables.push(table);
        Ok(())
    }

    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lock()
            .map(|data| data.order_items.clone())
            .unwrap_or_default()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.lock()
            .map(|data| data.orders.clone())
            .unwrap_or_default()
    }
}

impl OrderItemRepository for InMemoryStore {
    fn list(&self) -> Result<Vec<OrderItem>, DomainError> {
        Ok(self.lock()?.order_items.clone())
    }

    fn find_by_order_item_id(
        &self,
        order_item_id: &str,
    ) -> Result<Option<OrderItem>, DomainError> {
        Ok(self
            .lock()?
            .order_items
            .iter()
            .find(|i| i.order_item_id.as_deref() == Some(order_item_id))
            .cloned())
    }

    fn find_by_order(&self, order_id: &str) -> Result<Vec<OrderItem>, DomainError> {
        Ok(self
            .lock()?
            .order_items
            .iter()
            .filter(|i| i.order_id.as_deref() == Some(order_id))
            .cloned()
            .collect())
    }

    fn insert_many(&self, items: Vec<OrderItem>) -> Result<InsertManyResult, DomainError> {
        let mut data = self.lock()?;
        if let Some(dup) = items
            .iter()
            .find(|i| data.order_items.iter().any(|e| e.id == i.id))
        {
            return Err(DomainError::Internal(format!(
                "duplicate order item id {}",
                dup.id
            )));
        }
        let inserted_ids = items.iter().map(|i| i.id.clone()).collect();
        data.order_items.extend(items);
        Ok(InsertManyResult { inserted_ids })
    }

    fn update_one(
        &self,
        order_item_id: &str,
        patch: OrderItemPatch,
        upsert: bool,
    ) -> Result<UpdateResult, DomainError> {
        let mut data = self.lock()?;
        let existing = data
            .order_items
            .iter_mut()
            .find(|i| i.order_item_id.as_deref() == Some(order_item_id));

        if let Some(item) = existing {
            if let Some(unit_price) = patch.unit_price {
                item.unit_price = Some(unit_price);
            }
            if let Some(quantity) = patch.quantity {
                item.quantity = Some(quantity);
            }
            if let Some(food_id) = patch.food_id {
                item.food_id = Some(food_id);
            }
            item.updated_at = Some(patch.updated_at);
            return Ok(UpdateResult {
                matched_count: 1,
                modified_count: 1,
                upserted_count: 0,
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateResult {
                matched_count: 0,
                modified_count: 0,
                upserted_count: 0,
                upserted_id: None,
            });
        }

        let id = new_object_id();
        data.order_items.push(OrderItem {
            id: id.clone(),
            order_item_id: Some(order_item_id.to_string()),
            order_id: None,
            food_id: patch.food_id,
            quantity: patch.quantity,
            unit_price: patch.unit_price,
            created_at: None,
            updated_at: Some(patch.updated_at),
        });
        Ok(UpdateResult {
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id),
        })
    }

    fn find_foods(&self, food_ids: &[String]) -> Result<Vec<Food>, DomainError> {
        Ok(self
            .lock()?
            .foods
            .iter()
            .filter(|f| food_ids.contains(&f.food_id))
            .cloned()
            .collect())
    }

    fn find_orders(&self, order_ids: &[String]) -> Result<Vec<Order>, DomainError> {
        Ok(self
            .lock()?
            .orders
            .iter()
            .filter(|o| order_ids.contains(&o.order_id))
            .cloned()
            .collect())
    }

    fn find_tables(&self, table_ids: &[String]) -> Result<Vec<Table>, DomainError> {
        Ok(self
            .lock()?
            .tables
            .iter()
            .filter(|t| table_ids.contains(&t.table_id))
            .cloned()
            .collect())
    }
}

impl OrderCreator for InMemoryStore {
    fn create_order(&self, order: NewOrder) -> Result<String, DomainError> {
        let order_id = new_object_id();
        self.lock()?.orders.push(Order {
            order_id: order_id.clone(),
            table_id: order.table_id,
            order_date: order.order_date,
            created_at: order.order_date,
            updated_at: order.order_date,
        });
        Ok(order_id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::Utc;

    use super::*;

    #[test]
    fn seeded_foods_and_tables_are_found_by_the_join_lookups() {
        let store = InMemoryStore::new();

        store
            .insert_food(Food {
                food_id: "f1".to_string(),
                name: "Soup".to_string(),
                price: BigDecimal::from_str("6.00").unwrap(),
                food_image: None,
            })
            .unwrap();
        store
            .insert_table(Table {
                table_id: "t1".to_string(),
                table_number: 3,
            })
            .unwrap();

        let foods = store.find_foods(&["f1".to_string()]).unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Soup");
        let tables = store.find_tables(&["t1".to_string()]).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].table_number, 3);
    }

    #[test]
    fn seeding_a_poisoned_store_reports_an_error() {
        let store = std::sync::Arc::new(InMemoryStore::new());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.data.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        let err = store
            .insert_table(Table {
                table_id: "t1".to_string(),
                table_number: 3,
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[test]
    fn insert_many_rejects_duplicate_ids_without_writing() {
        let store = InMemoryStore::new();
        let item = OrderItem {
            id: "abc".to_string(),
            order_item_id: Some("abc".to_string()),
            order_id: None,
            food_id: None,
            quantity: None,
            unit_price: None,
            created_at: None,
            updated_at: None,
        };
        store.insert_many(vec![item.clone()]).unwrap();

        let err = store.insert_many(vec![item]).unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(store.order_items().len(), 1);
    }

    #[test]
    fn create_order_records_table_and_date() {
        let store = InMemoryStore::new();
        let now = Utc::now();

        let id = store
            .create_order(NewOrder {
                table_id: Some("t9".to_string()),
                order_date: now,
            })
            .unwrap();

        let orders = store.find_orders(&[id.clone()]).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, id);
        assert_eq!(orders[0].table_id.as_deref(), Some("t9"));
        assert_eq!(orders[0].order_date, now);
    }
}
