use actix_web::{web, HttpResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::invoice::{InvoiceLine, OrderItemsGroup};
use crate::domain::order_item::{
    InsertManyResult, OrderItem, OrderItemDraft, OrderItemPack, OrderItemUpdate, UpdateResult,
};
use crate::errors::AppError;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub food_id: Option<String>,
    pub quantity: Option<i32>,
    /// Rounded to two decimals before it is stored, e.g. 9.996 becomes "10.00"
    pub unit_price: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemsRequest {
    pub table_id: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItemRequest>,
}

/// Partial update; omitted or null fields are left untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderItemRequest {
    pub unit_price: Option<f64>,
    pub quantity: Option<i32>,
    pub food_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: String,
    pub order_item_id: Option<String>,
    pub order_id: Option<String>,
    pub food_id: Option<String>,
    pub quantity: Option<i32>,
    pub unit_price: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InsertManyResponse {
    #[serde(rename = "InsertedIDs")]
    pub inserted_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateResponse {
    #[serde(rename = "MatchedCount")]
    pub matched_count: u64,
    #[serde(rename = "ModifiedCount")]
    pub modified_count: u64,
    #[serde(rename = "UpsertedCount")]
    pub upserted_count: u64,
    #[serde(rename = "UpsertedID")]
    pub upserted_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InvoiceLineResponse {
    pub id: String,
    pub amount: Option<String>,
    pub price: Option<String>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemsGroupResponse {
    pub payment_due: String,
    pub total_count: i64,
    pub table_number: Option<i32>,
    pub order_items: Vec<InvoiceLineResponse>,
}

fn timestamp(at: Option<DateTime<Utc>>) -> Option<String> {
    at.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl From<OrderItem> for OrderItemResponse {
    fn from(i: OrderItem) -> Self {
        OrderItemResponse {
            id: i.id,
            order_item_id: i.order_item_id,
            order_id: i.order_id,
            food_id: i.food_id,
            quantity: i.quantity,
            unit_price: i.unit_price.map(|p| p.to_string()),
            created_at: timestamp(i.created_at),
            updated_at: timestamp(i.updated_at),
        }
    }
}

impl From<InvoiceLine> for InvoiceLineResponse {
    fn from(l: InvoiceLine) -> Self {
        InvoiceLineResponse {
            id: l.id,
            amount: l.amount.map(|a| a.to_string()),
            price: l.price.map(|p| p.to_string()),
            food_name: l.food_name,
            food_image: l.food_image,
            table_number: l.table_number,
            table_id: l.table_id,
            order_id: l.order_id,
            quantity: l.quantity,
        }
    }
}

impl From<OrderItemsGroup> for OrderItemsGroupResponse {
    fn from(g: OrderItemsGroup) -> Self {
        OrderItemsGroupResponse {
            payment_due: g.payment_due.to_string(),
            total_count: g.total_count,
            table_number: g.table_number,
            order_items: g.order_items.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<InsertManyResult> for InsertManyResponse {
    fn from(r: InsertManyResult) -> Self {
        InsertManyResponse {
            inserted_ids: r.inserted_ids,
        }
    }
}

impl From<UpdateResult> for UpdateResponse {
    fn from(r: UpdateResult) -> Self {
        UpdateResponse {
            matched_count: r.matched_count,
            modified_count: r.modified_count,
            upserted_count: r.upserted_count,
            upserted_id: r.upserted_id,
        }
    }
}

impl From<CreateOrderItemsRequest> for OrderItemPack {
    fn from(body: CreateOrderItemsRequest) -> Self {
        OrderItemPack {
            table_id: body.table_id,
            order_items: body
                .order_items
                .into_iter()
                .map(|i| OrderItemDraft {
                    food_id: i.food_id,
                    quantity: i.quantity,
                    unit_price: i.unit_price,
                })
                .collect(),
        }
    }
}

impl From<UpdateOrderItemRequest> for OrderItemUpdate {
    fn from(body: UpdateOrderItemRequest) -> Self {
        OrderItemUpdate {
            unit_price: body.unit_price,
            quantity: body.quantity,
            food_id: body.food_id,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orderItems
///
/// Returns every stored order item, unfiltered.
#[utoipa::path(
    get,
    path = "/orderItems",
    responses(
        (status = 200, description = "All order items", body = Vec<OrderItemResponse>),
        (status = 500, description = "Store read failed"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = state
        .run(|svc| svc.list_order_items())
        .await
        .map_err(|e| AppError::from_domain(e, "error occurred while fetching order items list"))?;

    let body: Vec<OrderItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /orderItems/{order_id}
///
/// Invoice-ready summary of an order: one entry per (order, table) with the
/// amount due, the item count and the joined line items.
#[utoipa::path(
    get,
    path = "/orderItems/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order identifier"),
    ),
    responses(
        (status = 200, description = "Grouped order items", body = Vec<OrderItemsGroupResponse>),
        (status = 500, description = "Aggregation failed"),
    ),
    tag = "order-items"
)]
pub async fn list_order_items_by_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let groups = state
        .run(move |svc| svc.items_by_order(&order_id))
        .await
        .map_err(|e| {
            AppError::from_domain(e, "error occurred while listing order items by order ID")
        })?;

    let body: Vec<OrderItemsGroupResponse> = groups.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /orderItem/{order_item_id}
///
/// An unknown id is reported as a 500, the same as a store failure.
#[utoipa::path(
    get,
    path = "/orderItem/{order_item_id}",
    params(
        ("order_item_id" = String, Path, description = "Order item identifier"),
    ),
    responses(
        (status = 200, description = "Order item found", body = OrderItemResponse),
        (status = 500, description = "Order item missing or store read failed"),
    ),
    tag = "order-items"
)]
pub async fn get_order_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_item_id = path.into_inner();

    let item = state
        .run(move |svc| svc.get_order_item(&order_item_id))
        .await
        .map_err(|e| AppError::from_domain(e, "error occurred while fetching order item"))?;

    Ok(HttpResponse::Ok().json(OrderItemResponse::from(item)))
}

/// POST /orderItem
///
/// Creates one order for `table_id` and inserts every item of the pack under
/// it. Any invalid item rejects the whole pack before anything is written.
#[utoipa::path(
    post,
    path = "/orderItem",
    request_body = CreateOrderItemsRequest,
    responses(
        (status = 200, description = "Order items inserted", body = InsertManyResponse),
        (status = 400, description = "Malformed body or invalid item"),
        (status = 500, description = "Order creation or insert failed"),
    ),
    tag = "order-items"
)]
pub async fn create_order_items(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderItemsRequest>,
) -> Result<HttpResponse, AppError> {
    let pack = OrderItemPack::from(body.into_inner());

    let result = state
        .run(move |svc| svc.create_order_items(pack))
        .await
        .map_err(|e| AppError::from_domain(e, "error occurred while inserting order items"))?;

    Ok(HttpResponse::Ok().json(InsertManyResponse::from(result)))
}

/// PATCH /orderItem/{order_item_id}
///
/// Applies the supplied fields and refreshes `updated_at`. Returns the match
/// counts, not the updated record.
#[utoipa::path(
    patch,
    path = "/orderItem/{order_item_id}",
    params(
        ("order_item_id" = String, Path, description = "Order item identifier"),
    ),
    request_body = UpdateOrderItemRequest,
    responses(
        (status = 200, description = "Update applied", body = UpdateResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Update failed"),
    ),
    tag = "order-items"
)]
pub async fn update_order_item(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderItemRequest>,
) -> Result<HttpResponse, AppError> {
    let order_item_id = path.into_inner();
    let update = OrderItemUpdate::from(body.into_inner());

    let result = state
        .run(move |svc| svc.update_order_item(&order_item_id, update))
        .await
        .map_err(|e| AppError::from_domain(e, "Order item update failed"))?;

    Ok(HttpResponse::Ok().json(UpdateResponse::from(result)))
}
