use async_trait::async_trait;
use property_records_db::models::installment::InstallmentModel;
use property_records_db::repository::create::Create;
use std::error::Error;
use tracing::debug;

use super::repo_impl::InstallmentRepositoryImpl;

impl InstallmentRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &InstallmentRepositoryImpl,
        mut item: InstallmentModel,
    ) -> Result<InstallmentModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO installments
            (property_id, installment_payment_amount, installment_interest_amount, delayed_interest_amount, installment_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(item.property_id)
        .bind(item.installment_payment_amount)
        .bind(item.installment_interest_amount)
        .bind(item.delayed_interest_amount)
        .bind(item.installment_date);

        let id = repo.executor.insert_in_savepoint(query).await?;

        debug!(installment_id = id, property_id = item.property_id, "Inserted installment row");
        item.id = id;
        Ok(item)
    }
}

#[async_trait]
impl Create<InstallmentModel> for InstallmentRepositoryImpl {
    async fn create(
        &self,
        item: InstallmentModel,
    ) -> Result<InstallmentModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
