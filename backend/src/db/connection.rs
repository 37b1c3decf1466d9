use sqlx::postgres::PgPool;

pub type DbPool = PgPool;

pub async fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPool::connect(database_url).await?;
    Ok(pool)
}

/// Pool that defers connecting until first use. Router-level tests use this
/// so they can exercise routing and middleware without a live database.
pub fn create_lazy_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = PgPool::connect_lazy(database_url)?;
    Ok(pool)
}
