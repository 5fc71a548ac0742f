//! Test helper module for transaction-based test isolation
//!
//! Repositories handed out by [`setup_test_context`] run on one transaction
//! that is rolled back when the context is dropped, so tests never need to
//! clean up after themselves.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::executor::Executor;
use crate::repository::db_init::init_database;
use crate::repository::property::PropertyRepositories;

/// Transactional database session for one test.
pub struct TestContext {
    pub executor: Executor,
    pub property_repos: PropertyRepositories,
}

impl TestContext {
    /// Get the property repositories from the context
    pub fn property_repos(&self) -> &PropertyRepositories {
        &self.property_repos
    }
}

/// Connects with `DATABASE_URL`, applies the migrations and opens the
/// transaction the returned repositories are bound to.
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let property_repo = &ctx.property_repos().property_repository;
///     // Everything written here is rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = DatabaseConfig {
        max_connections: 1,
        ..DatabaseConfig::from_env()?
    };
    let pool = config.connect().await?;
    init_database(&pool).await?;

    let executor = Executor::begin(&pool).await?;
    let property_repos = PropertyRepositories::new(&executor);

    Ok(TestContext {
        executor,
        property_repos,
    })
}

/// Migrated pool for tests whose writes are committed.
///
/// Such tests go through the service, which manages its own transactions;
/// mark them `#[serial]`.
pub async fn setup_shared_pool() -> Result<Arc<PgPool>, Box<dyn std::error::Error + Send + Sync>> {
    let pool = DatabaseConfig::from_env()?.connect().await?;
    init_database(&pool).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::property::test_utils::create_identified_property;
    use property_records_db::repository::create::Create;

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let property = create_identified_property("Rollback Check");
        let unique_id = property.unique_id().map(str::to_string).unwrap();

        {
            let ctx = setup_test_context().await?;
            ctx.property_repos()
                .property_repository
                .create(property)
                .await?;
            assert!(ctx.executor.is_active().await);
        }

        let pool = setup_shared_pool().await?;
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM property WHERE property_unique_id = $1")
                .bind(&unique_id)
                .fetch_one(pool.as_ref())
                .await?;
        assert_eq!(count, 0);

        Ok(())
    }
}
