use axum::{http::Method, Extension};
use club_events::{connect_to_db, init_schema};
use envconfig::Envconfig;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

#[derive(Envconfig)]
struct Config {
    #[envconfig(from = "DATABASE_URL", default = "data.db")]
    pub db_url: String,
    #[envconfig(from = "PORT", default = "5000")]
    pub port: u16,
    // sqlite allows a single writer at a time
    #[envconfig(from = "POOL_SIZE", default = "1")]
    pub pool_size: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("club_events=debug,tower_http=info")),
        )
        .init();

    let config = Config::init_from_env()?;

    let pool = connect_to_db(&config.db_url, config.pool_size)?;
    init_schema(&pool).await?;
    tracing::info!(db = %config.db_url, "database ready");

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);
    let app = club_events::app()
        .layer(Extension(pool))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {addr}");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
