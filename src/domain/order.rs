use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// Parent record shared by every item of a pack.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub table_id: Option<String>,
    pub order_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub table_id: Option<String>,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub food_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub table_id: String,
    pub table_number: i32,
}
