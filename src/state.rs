use std::time::Duration;

use actix_web::web;

use crate::application::order_item_service::OrderItemService;
use crate::domain::errors::DomainError;

/// Per-worker shared state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub order_items: OrderItemService,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(order_items: OrderItemService, store_timeout: Duration) -> Self {
        Self {
            order_items,
            store_timeout,
        }
    }

    /// Runs a synchronous store call on the blocking pool, bounded by the
    /// store timeout. The blocking call is not cancelled on timeout.
    pub async fn run<T, F>(&self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce(&OrderItemService) -> Result<T, DomainError> + Send + 'static,
        T: Send + 'static,
    {
        let service = self.order_items.clone();
        match tokio::time::timeout(self.store_timeout, web::block(move || f(&service))).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(DomainError::Internal(e.to_string())),
            Err(_) => Err(DomainError::Timeout(self.store_timeout)),
        }
    }
}
