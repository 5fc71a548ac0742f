use async_trait::async_trait;
use property_records_api::{RecordError, RecordResult};
use property_records_db::unique_id::{format_unique_id, scheme_prefix, UniqueIdGenerator};
use tracing::{debug, error};

use super::repo_impl::SchemeSequenceRepositoryImpl;

const NEXT_VALUE_QUERY: &str = r#"
    INSERT INTO scheme_sequence (scheme_prefix, last_value)
    VALUES ($1, 1)
    ON CONFLICT (scheme_prefix)
    DO UPDATE SET last_value = scheme_sequence.last_value + 1
    RETURNING last_value
"#;

impl SchemeSequenceRepositoryImpl {
    pub(super) async fn generate_impl(
        repo: &SchemeSequenceRepositoryImpl,
        scheme_name: Option<&str>,
    ) -> RecordResult<String> {
        let prefix = scheme_prefix(scheme_name)?;

        let next = sqlx::query_scalar::<_, i64>(NEXT_VALUE_QUERY)
            .bind(prefix.as_str())
            .fetch_one(repo.pool())
            .await
            .map_err(|e| {
                error!(scheme_prefix = %prefix, error = %e, "Error advancing scheme sequence");
                RecordError::GenerationError(format!(
                    "could not advance sequence for scheme '{prefix}': {e}"
                ))
            })?;

        let counter = u64::try_from(next).map_err(|_| {
            RecordError::GenerationError(format!(
                "sequence for scheme '{prefix}' returned invalid value {next}"
            ))
        })?;

        let unique_id = format_unique_id(&prefix, counter);
        debug!(property_unique_id = %unique_id, "Generated property unique id");
        Ok(unique_id)
    }
}

#[async_trait]
impl UniqueIdGenerator for SchemeSequenceRepositoryImpl {
    async fn generate(&self, scheme_name: Option<&str>) -> RecordResult<String> {
        Self::generate_impl(self, scheme_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::setup_shared_pool;
    use property_records_db::unique_id::parse_unique_id;
    use serial_test::serial;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_generate_advances_per_scheme() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = setup_shared_pool().await?;
        let generator = SchemeSequenceRepositoryImpl::new(pool);

        let first = generator.generate(Some("Sequence Check")).await?;
        let second = generator.generate(Some("sequence   check")).await?;

        let (prefix_a, counter_a) = parse_unique_id(&first).unwrap();
        let (prefix_b, counter_b) = parse_unique_id(&second).unwrap();
        assert_eq!(prefix_a, "SEQUENCE_CHECK");
        assert_eq!(prefix_a, prefix_b);
        assert_eq!(counter_b, counter_a + 1);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_concurrent_generation_is_unique() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = setup_shared_pool().await?;
        let generator = Arc::new(SchemeSequenceRepositoryImpl::new(pool));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let generator = generator.clone();
            handles.push(tokio::spawn(async move {
                generator.generate(Some("Concurrent Scheme")).await
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await??);
        }
        assert_eq!(ids.len(), 20);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_missing_scheme_fails_without_query() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = setup_shared_pool().await?;
        let generator = SchemeSequenceRepositoryImpl::new(pool);

        let result = generator.generate(None).await;

        assert!(matches!(result, Err(RecordError::GenerationError(_))));
        Ok(())
    }
}
