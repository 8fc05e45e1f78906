pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;
pub mod state;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_item_service::OrderItemService;
use errors::AppError;
use infrastructure::order_item_repo::DieselStore;

pub use config::AppConfig;
pub use db::{create_pool, DbPool};
pub use state::AppState;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migrations", applied.len());
    Ok(())
}

/// State backed by PostgreSQL: one `DieselStore` serves as both the
/// order-item collection and the order creator.
pub fn postgres_state(pool: DbPool, config: &AppConfig) -> AppState {
    let store = Arc::new(DieselStore::new(pool));
    let service = OrderItemService::new(store.clone(), store, config.upsert_on_miss);
    AppState::new(service, config.store_timeout)
}

/// Registers the order-item routes, the JSON error handling and the API docs.
pub fn configure(cfg: &mut web::ServiceConfig) {
    use handlers::order_items;

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/orderItems", web::get().to(order_items::list_order_items))
    .route(
        "/orderItems/{order_id}",
        web::get().to(order_items::list_order_items_by_order),
    )
    .route("/orderItem", web::post().to(order_items::create_order_items))
    .route(
        "/orderItem/{order_item_id}",
        web::get().to(order_items::get_order_item),
    )
    .route(
        "/orderItem/{order_item_id}",
        web::patch().to(order_items::update_order_item),
    )
    .service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((host.to_string(), port))?
    .run())
}
