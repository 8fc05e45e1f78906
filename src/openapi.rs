use utoipa::OpenApi;

use crate::handlers::order_items;

#[derive(OpenApi)]
#[openapi(
    paths(
        order_items::list_order_items,
        order_items::list_order_items_by_order,
        order_items::get_order_item,
        order_items::create_order_items,
        order_items::update_order_item,
    ),
    components(schemas(
        order_items::OrderItemRequest,
        order_items::CreateOrderItemsRequest,
        order_items::UpdateOrderItemRequest,
        order_items::OrderItemResponse,
        order_items::InsertManyResponse,
        order_items::UpdateResponse,
        order_items::InvoiceLineResponse,
        order_items::OrderItemsGroupResponse,
    )),
    tags((name = "order-items", description = "Restaurant order items"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_order_item_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/orderItems"));
        assert!(paths.contains(&"/orderItems/{order_id}"));
        assert!(paths.contains(&"/orderItem"));
        assert!(paths.contains(&"/orderItem/{order_item_id}"));
    }
}
