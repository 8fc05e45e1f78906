use bigdecimal::BigDecimal;

/// A flattened order item after the food, order and table joins. Any field whose
/// join found nothing stays `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub id: String,
    pub amount: Option<BigDecimal>,
    pub price: Option<BigDecimal>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>,
    pub quantity: Option<i32>,
}

/// Invoice-ready summary for one (order, table) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemsGroup {
    pub payment_due: BigDecimal,
    pub total_count: i64,
    pub table_number: Option<i32>,
    pub order_items: Vec<InvoiceLine>,
}
