use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{Food, Order, Table};
use crate::domain::order_item::{OrderItem, OrderItemPatch};
use crate::schema::{foods, order_items, orders, tables};

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Identifiable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: String,
    pub order_item_id: Option<String>,
    pub order_id: Option<String>,
    pub food_id: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<BigDecimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// `None` fields are left out of the generated `SET` clause.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = order_items)]
pub struct OrderItemChangeset {
    pub unit_price: Option<BigDecimal>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub order_id: String,
    pub table_id: Option<String>,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Identifiable)]
#[diesel(table_name = foods)]
#[diesel(primary_key(food_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FoodRow {
    pub food_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub food_image: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, Identifiable)]
#[diesel(table_name = tables)]
#[diesel(primary_key(table_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TableRow {
    pub table_id: String,
    pub table_number: i32,
}

impl From<OrderItemRow> for OrderItem {
    fn from(r: OrderItemRow) -> Self {
        OrderItem {
            id: r.id,
            order_item_id: r.order_item_id,
            order_id: r.order_id,
            food_id: r.food_id,
            quantity: r.quantity,
            unit_price: r.unit_price,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<OrderItem> for OrderItemRow {
    fn from(i: OrderItem) -> Self {
        OrderItemRow {
            id: i.id,
            order_item_id: i.order_item_id,
            order_id: i.order_id,
            food_id: i.food_id,
            quantity: i.quantity,
            unit_price: i.unit_price,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

impl From<OrderItemPatch> for OrderItemChangeset {
    fn from(p: OrderItemPatch) -> Self {
        OrderItemChangeset {
            unit_price: p.unit_price,
            quantity: p.quantity,
            food_id: p.food_id,
            updated_at: Some(p.updated_at),
        }
    }
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Order {
            order_id: r.order_id,
            table_id: r.table_id,
            order_date: r.order_date,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<FoodRow> for Food {
    fn from(r: FoodRow) -> Self {
        Food {
            food_id: r.food_id,
            name: r.name,
            price: r.price,
            food_image: r.food_image,
        }
    }
}

impl From<TableRow> for Table {
    fn from(r: TableRow) -> Self {
        Table {
            table_id: r.table_id,
            table_number: r.table_number,
        }
    }
}
