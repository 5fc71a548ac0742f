use async_trait::async_trait;
use property_records_db::models::service_charge::ServiceChargeModel;
use property_records_db::repository::create::Create;
use std::error::Error;
use tracing::debug;

use super::repo_impl::ServiceChargeRepositoryImpl;

impl ServiceChargeRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ServiceChargeRepositoryImpl,
        mut item: ServiceChargeModel,
    ) -> Result<ServiceChargeModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO service_charge
            (property_id, service_charge_financial_year, service_charge_amount, service_charges_late_fee, service_charges_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(item.property_id)
        .bind(item.service_charge_financial_year.as_deref())
        .bind(item.service_charge_amount)
        .bind(item.service_charges_late_fee)
        .bind(item.service_charges_date);

        let id = repo.executor.insert_in_savepoint(query).await?;

        debug!(service_charge_id = id, property_id = item.property_id, "Inserted service charge row");
        item.id = id;
        Ok(item)
    }
}

#[async_trait]
impl Create<ServiceChargeModel> for ServiceChargeRepositoryImpl {
    async fn create(
        &self,
        item: ServiceChargeModel,
    ) -> Result<ServiceChargeModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::property::test_utils::create_identified_property;
    use crate::test_helper::setup_test_context;
    use property_records_db::repository::create::Create;
    use property_records_db::test_utils::create_test_service_charge;
    use rust_decimal::Decimal;

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_create_service_charge() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.property_repos();

        let property = repos
            .property_repository
            .create(create_identified_property("Service Charges"))
            .await?;
        let mut service_charge = create_test_service_charge("2023-24", 1200);
        service_charge.property_id = property.id;

        let saved = repos.service_charge_repository.create(service_charge).await?;

        assert!(saved.id > 0);
        assert_eq!(saved.service_charge_financial_year.as_deref(), Some("2023-24"));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a PostgreSQL database at DATABASE_URL"]
    async fn test_negative_late_fee_violates_check(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let repos = ctx.property_repos();

        let property = repos
            .property_repository
            .create(create_identified_property("Late Fees"))
            .await?;
        let mut service_charge = create_test_service_charge("2023-24", 1200);
        service_charge.property_id = property.id;
        service_charge.service_charges_late_fee = Some(Decimal::from(-1));

        let result = repos.service_charge_repository.create(service_charge).await;

        let err = result.unwrap_err();
        let db_err = err.downcast_ref::<sqlx::Error>().and_then(|e| e.as_database_error());
        assert!(db_err.map(|e| e.is_check_violation()).unwrap_or(false));

        Ok(())
    }
}
