//! Data access layer.
//!
//! Every operation takes the connection it runs on. Nothing is cached between
//! calls; each one reads or writes the database directly.

pub mod club;
pub mod event;

#[cfg(test)]
pub(crate) async fn test_pool() -> crate::DbPool {
    let pool = crate::connect_to_db(":memory:", 1).unwrap();
    crate::init_schema(&pool).await.unwrap();
    pool
}
