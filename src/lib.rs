use axum::{routing::get, Router};
use deadpool::managed::Pool;
use diesel::sqlite::SqliteConnection;
use diesel_async::{
    pooled_connection::AsyncDieselConnectionManager, sync_connection_wrapper::SyncConnectionWrapper,
    SimpleAsyncConnection,
};

pub mod api;
pub mod dao;
pub mod error;
pub mod models;
pub mod schema;

pub type DbConn = SyncConnectionWrapper<SqliteConnection>;
pub type DbPool = Pool<AsyncDieselConnectionManager<DbConn>>;

const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS clubs (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    link TEXT NOT NULL,
    industry TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    about TEXT NOT NULL,
    location TEXT NOT NULL,
    registered_users INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    club_id INTEGER NOT NULL,
    time TEXT NOT NULL,
    description TEXT NOT NULL,
    link TEXT,
    industry TEXT,
    location TEXT,
    registered_users INTEGER DEFAULT 0
);
"#;

/// Builds the connection pool. `db_url` is a SQLite file path or `:memory:`.
///
/// An in-memory database lives as long as its connection, so callers using
/// `:memory:` should keep `max_size` at 1.
pub fn connect_to_db(db_url: &str, max_size: usize) -> anyhow::Result<DbPool> {
    let db_config = AsyncDieselConnectionManager::<DbConn>::new(db_url);
    Ok(Pool::builder(db_config).max_size(max_size).build()?)
}

/// Creates the `clubs` and `events` tables if they are missing.
pub async fn init_schema(pool: &DbPool) -> anyhow::Result<()> {
    let conn = &mut pool.get().await?;
    conn.batch_execute(CREATE_TABLES).await?;
    tracing::debug!("database schema ready");
    Ok(())
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(api::club::list))
        .nest("/api", api::club::app())
        .merge(api::event::app())
}
