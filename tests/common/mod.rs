use employee_service::db::{self, employee::EmployeeStore};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// A fresh in-memory database with the employees table. One connection that
/// never expires, so the database lives as long as the pool.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();
    pool
}

pub async fn memory_store() -> EmployeeStore {
    EmployeeStore::new(memory_pool().await)
}
