use async_trait::async_trait;
use property_records_db::models::aggregate::PropertyJoinRow;
use property_records_db::repository::load_aggregate_rows::LoadAggregateRows;
use crate::utils::decode_rows;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PropertyRepositoryImpl;

const LOAD_AGGREGATE_ROWS_QUERY: &str = r#"
    SELECT
        p.*,
        i.id AS installment_id,
        i.property_id AS installment_property_id,
        i.installment_payment_amount,
        i.installment_interest_amount,
        i.delayed_interest_amount,
        i.installment_date,
        s.id AS service_charge_id,
        s.property_id AS service_charge_property_id,
        s.service_charge_financial_year,
        s.service_charge_amount,
        s.service_charges_late_fee,
        s.service_charges_date
    FROM property p
    LEFT JOIN installments i ON p.id = i.property_id
    LEFT JOIN service_charge s ON p.id = s.property_id
    ORDER BY p.id, i.id, s.id
"#;

impl PropertyRepositoryImpl {
    pub(super) async fn load_aggregate_rows_impl(
        repo: &PropertyRepositoryImpl,
    ) -> Result<Vec<PropertyJoinRow>, Box<dyn Error + Send + Sync>> {
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            if let Some(transaction) = tx.as_mut() {
                sqlx::query(LOAD_AGGREGATE_ROWS_QUERY)
                    .fetch_all(&mut **transaction)
                    .await?
            } else {
                return Err("Transaction has been consumed".into());
            }
        };

        let result: Vec<PropertyJoinRow> = decode_rows(&rows)?;
        debug!(rows = result.len(), "Loaded property join rows");
        Ok(result)
    }
}

#[async_trait]
impl LoadAggregateRows for PropertyRepositoryImpl {
    async fn load_aggregate_rows(
        &self,
    ) -> Result<Vec<PropertyJoinRow>, Box<dyn Error + Send + Sync>> {
        Self::load_aggregate_rows_impl(self).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::property::test_utils::create_identified_property;
    use crate::test_helper::setup_test_context;
    use property_records_db::repository::create::Create;
    use property_records_db::repository::load_aggregate_rows::LoadAggregateRows;
    use property_records_db::test_utils::{create_test_installment, create_test_service_charge};

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_childless_property_has_single_null_row(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let property_repo = &ctx.property_repos().property_repository;

        let saved = property_repo.create(create_identified_property("Childless")).await?;

        let rows = property_repo.load_aggregate_rows().await?;
        let own: Vec<_> = rows.iter().filter(|r| r.property.id == saved.id).collect();

        assert_eq!(own.len(), 1);
        assert!(own[0].installment.is_none());
        assert!(own[0].service_charge.is_none());
        assert_eq!(own[0].property.unique_id(), saved.unique_id());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_children_fan_out_as_cross_product(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.property_repos();

        let saved = repos
            .property_repository
            .create(create_identified_property("Cross Product"))
            .await?;
        for amount in [100, 200] {
            let mut installment = create_test_installment(amount);
            installment.property_id = saved.id;
            repos.installment_repository.create(installment).await?;
        }
        let mut service_charge = create_test_service_charge("2023-24", 1200);
        service_charge.property_id = saved.id;
        repos.service_charge_repository.create(service_charge).await?;

        let rows = repos.property_repository.load_aggregate_rows().await?;
        let own: Vec<_> = rows.iter().filter(|r| r.property.id == saved.id).collect();

        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|r| r.installment.is_some() && r.service_charge.is_some()));

        Ok(())
    }
}
