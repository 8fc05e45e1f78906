//! The "items by order" read: order items left-joined with food, order and
//! table, then grouped per (order, table) into invoice-ready summaries.
//!
//! The pipeline is a pure function of the store contents it is handed, so the
//! same stages run whether the rows come from PostgreSQL or from memory.

use bigdecimal::BigDecimal;

use crate::domain::invoice::{InvoiceLine, OrderItemsGroup};
use crate::domain::order::{Food, Order, Table};
use crate::domain::order_item::OrderItem;

/// Rows the pipeline joins across. Collections may hold unrelated rows; every
/// stage filters on its own keys.
#[derive(Debug, Clone, Copy)]
pub struct JoinSource<'a> {
    pub items: &'a [OrderItem],
    pub foods: &'a [Food],
    pub orders: &'a [Order],
    pub tables: &'a [Table],
}

trait JoinKey {
    fn join_key(&self) -> &str;
}

impl JoinKey for Food {
    fn join_key(&self) -> &str {
        &self.food_id
    }
}

impl JoinKey for Order {
    fn join_key(&self) -> &str {
        &self.order_id
    }
}

impl JoinKey for Table {
    fn join_key(&self) -> &str {
        &self.table_id
    }
}

#[derive(Debug, PartialEq)]
struct GroupKey {
    order_id: Option<String>,
    table_id: Option<String>,
    table_number: Option<i32>,
}

impl GroupKey {
    fn of(line: &InvoiceLine) -> Self {
        Self {
            order_id: line.order_id.clone(),
            table_id: line.table_id.clone(),
            table_number: line.table_number,
        }
    }
}

/// Runs the pipeline for `order_id`.
///
/// Groups come out in the order their first item was matched, and items keep
/// their match order inside a group.
pub fn items_by_order(order_id: &str, source: &JoinSource<'_>) -> Vec<OrderItemsGroup> {
    let matched = source
        .items
        .iter()
        .filter(|item| item.order_id.as_deref() == Some(order_id));

    let mut lines = Vec::new();
    for item in matched {
        for food in lookup(source.foods, item.food_id.as_deref()) {
            for order in lookup(source.orders, item.order_id.as_deref()) {
                let table_id = order.and_then(|o| o.table_id.as_deref());
                for table in lookup(source.tables, table_id) {
                    lines.push(project(item, food, order, table));
                }
            }
        }
    }

    group(lines)
}

/// Left join unwound with nulls preserved: one entry per match, or a single
/// `None` when the local key is missing or matches nothing.
fn lookup<'a, T: JoinKey>(foreign: &'a [T], local: Option<&str>) -> Vec<Option<&'a T>> {
    let matches: Vec<Option<&T>> = match local {
        Some(local) => foreign
            .iter()
            .filter(|row| row.join_key() == local)
            .map(Some)
            .collect(),
        None => Vec::new(),
    };
    if matches.is_empty() {
        vec![None]
    } else {
        matches
    }
}

fn project(
    item: &OrderItem,
    food: Option<&Food>,
    order: Option<&Order>,
    table: Option<&Table>,
) -> InvoiceLine {
    InvoiceLine {
        id: item.id.clone(),
        amount: food.map(|f| f.price.clone()),
        price: food.map(|f| f.price.clone()),
        food_name: food.map(|f| f.name.clone()),
        food_image: food.and_then(|f| f.food_image.clone()),
        table_number: table.map(|t| t.table_number),
        table_id: table.map(|t| t.table_id.clone()),
        order_id: order.map(|o| o.order_id.clone()),
        quantity: item.quantity,
    }
}

fn group(lines: Vec<InvoiceLine>) -> Vec<OrderItemsGroup> {
    let mut keys: Vec<GroupKey> = Vec::new();
    let mut groups: Vec<OrderItemsGroup> = Vec::new();

    for line in lines {
        let key = GroupKey::of(&line);
        let idx = match keys.iter().position(|k| *k == key) {
            Some(idx) => idx,
            None => {
                groups.push(OrderItemsGroup {
                    payment_due: BigDecimal::from(0),
                    total_count: 0,
                    table_number: key.table_number,
                    order_items: Vec::new(),
                });
                keys.push(key);
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        // Missing amounts are skipped, not treated as zero-priced errors.
        if let Some(amount) = &line.amount {
            group.payment_due = &group.payment_due + amount;
        }
        group.total_count += 1;
        group.order_items.push(line);
    }

    groups
}
