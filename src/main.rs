use dotenvy::dotenv;
use std::io;

use order_item_service::{build_server, create_pool, postgres_state, run_migrations, AppConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;
    let pool = create_pool(&config.database_url).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!(
        "Starting server at http://{}:{} (store timeout {:?}, upsert on miss: {})",
        config.host,
        config.port,
        config.store_timeout,
        config.upsert_on_miss
    );

    build_server(postgres_state(pool, &config), &config.host, config.port)?.await
}
