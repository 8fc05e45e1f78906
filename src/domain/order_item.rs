use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;
use validator::Validate;

use super::errors::DomainError;

/// Number of decimal places kept on a stored unit price.
pub const PRICE_SCALE: i64 = 2;

/// A persisted order line. Everything but the storage `id` is optional since an
/// upsert on update-miss writes only the patched fields.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: String,
    pub order_item_id: Option<String>,
    pub order_id: Option<String>,
    pub food_id: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<BigDecimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One item of an incoming pack, before it is stamped and persisted.
#[derive(Debug, Clone, Default, Validate)]
pub struct OrderItemDraft {
    #[validate(required(message = "food_id is required"), length(min = 1))]
    pub food_id: Option<String>,
    #[validate(required(message = "quantity is required"))]
    pub quantity: Option<i32>,
    #[validate(required(message = "unit_price is required"))]
    pub unit_price: Option<f64>,
}

/// A draft that passed validation, with its price already rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedOrderItem {
    pub food_id: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

#[derive(Debug, Clone, Default)]
pub struct OrderItemPack {
    pub table_id: Option<String>,
    pub order_items: Vec<OrderItemDraft>,
}

/// Fields applied by a partial update. `None` leaves the stored value untouched;
/// `updated_at` is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemPatch {
    pub unit_price: Option<BigDecimal>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Client side view of a partial update, before the price is rounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItemUpdate {
    pub unit_price: Option<f64>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertManyResult {
    pub inserted_ids: Vec<String>,
}

/// Outcome of a single-item update.
///
/// Every matched item has its `updated_at` rewritten, so `modified_count`
/// always equals `matched_count`, even when the supplied values are the ones
/// already stored.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl OrderItemDraft {
    /// Validates the draft and rounds its price.
    pub fn stage(self) -> Result<StagedOrderItem, DomainError> {
        self.validate()?;
        match (self.food_id, self.quantity, self.unit_price) {
            (Some(food_id), Some(quantity), Some(unit_price)) => Ok(StagedOrderItem {
                food_id,
                quantity,
                unit_price: round_price(unit_price)?,
            }),
            _ => Err(DomainError::InvalidInput(
                "food_id, quantity and unit_price are required".to_string(),
            )),
        }
    }
}

impl StagedOrderItem {
    /// Stamps a fresh identifier and timestamps and attaches the parent order.
    pub fn into_order_item(self, order_id: &str, now: DateTime<Utc>) -> OrderItem {
        let id = new_object_id();
        OrderItem {
            order_item_id: Some(id.clone()),
            id,
            order_id: Some(order_id.to_string()),
            food_id: Some(self.food_id),
            quantity: Some(self.quantity),
            unit_price: Some(self.unit_price),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

impl OrderItemUpdate {
    pub fn into_patch(self, now: DateTime<Utc>) -> Result<OrderItemPatch, DomainError> {
        Ok(OrderItemPatch {
            unit_price: self.unit_price.map(round_price).transpose()?,
            quantity: self.quantity,
            food_id: self.food_id,
            updated_at: now,
        })
    }
}

/// Rounds a client supplied price to two decimals, halves away from zero.
///
/// The value goes through its shortest decimal representation first, so `9.995`
/// rounds to `10.00` rather than following the binary expansion of the float.
pub fn round_price(raw: f64) -> Result<BigDecimal, DomainError> {
    let value = BigDecimal::from_str(&raw.to_string())
        .map_err(|e| DomainError::InvalidInput(format!("Invalid unit_price '{}': {}", raw, e)))?;
    Ok(value.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp))
}

/// Current time at the precision an RFC 3339 timestamp keeps (whole seconds, UTC).
pub fn now_truncated() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Fresh 32 character hex identifier.
pub fn new_object_id() -> String {
    Uuid::new_v4().simple().to_string()
}
