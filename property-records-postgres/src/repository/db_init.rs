//! Schema setup and teardown.
//!
//! Applies the `migrations/` scripts in ascending order and the `cleanup/`
//! scripts in descending order. Every migration uses `IF NOT EXISTS`, so
//! initializing an existing schema is a no-op.

use sqlx::PgPool;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Order in which a directory of SQL scripts is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOrder {
    Ascending,
    Descending,
}

/// Creates the property schema from `migrations/`, oldest script first.
///
/// ```rust,no_run
/// use property_records_postgres::config::DatabaseConfig;
/// use property_records_postgres::repository::db_init::init_database;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = DatabaseConfig::from_env()?.connect().await?;
/// init_database(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn init_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations");
    let applied = run_scripts(pool, &dir, ScriptOrder::Ascending).await?;
    info!(scripts = applied, "Property schema initialized");
    Ok(())
}

/// Drops the property schema using `cleanup/`, newest script first.
pub async fn cleanup_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("cleanup");
    let applied = run_scripts(pool, &dir, ScriptOrder::Descending).await?;
    info!(scripts = applied, "Property schema dropped");
    Ok(())
}

/// Runs every `.sql` file of `dir` sorted by file name. Returns how many ran.
async fn run_scripts(pool: &PgPool, dir: &Path, order: ScriptOrder) -> Result<usize, sqlx::Error> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(sqlx::Error::Io)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("sql"))
        .collect();

    scripts.sort();
    if order == ScriptOrder::Descending {
        scripts.reverse();
    }

    for script in &scripts {
        let sql = fs::read_to_string(script).map_err(sqlx::Error::Io)?;
        debug!(script = %script.display(), "Applying SQL script");
        sqlx::raw_sql(&sql).execute(pool).await?;
    }

    Ok(scripts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_init_is_idempotent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = DatabaseConfig::from_env()?.connect().await?;

        init_database(&pool).await?;
        init_database(&pool).await?;

        let tables: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT table_name::TEXT FROM information_schema.tables
            WHERE table_schema = 'public'
              AND table_name IN ('property', 'installments', 'service_charge', 'scheme_sequence')
            ORDER BY table_name
            "#,
        )
        .fetch_all(&pool)
        .await?;

        assert_eq!(
            tables,
            vec!["installments", "property", "scheme_sequence", "service_charge"]
        );

        Ok(())
    }
}
