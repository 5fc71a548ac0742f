use property_records_api::{
    PropertyListResponse, PropertySubmission, PropertyWriteResponse, RecordError, RecordResult,
    WriteStage,
};
use property_records_db::aggregate::WriteResult;
use property_records_db::models::aggregate::PropertyAggregate;
use property_records_db::models::installment::InstallmentModel;
use property_records_db::models::property::PropertyModel;
use property_records_db::models::service_charge::ServiceChargeModel;
use property_records_db::unique_id::UniqueIdGenerator;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::executor::Executor;
use crate::repository::property::{PropertyRepositories, SchemeSequenceRepositoryImpl};

/// Entry point for submitting and listing property records.
///
/// Each submission gets a fresh identifier from the generator and is then
/// written inside its own transaction: either the property and all of its
/// history rows are committed, or nothing is.
pub struct PropertyRecordService {
    pool: Arc<PgPool>,
    id_generator: Arc<dyn UniqueIdGenerator>,
}

impl PropertyRecordService {
    /// Service backed by the `scheme_sequence` table for identifiers.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let id_generator: Arc<dyn UniqueIdGenerator> =
            Arc::new(SchemeSequenceRepositoryImpl::new(pool.clone()));
        Self { pool, id_generator }
    }

    pub fn with_id_generator(pool: Arc<PgPool>, id_generator: Arc<dyn UniqueIdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    pub async fn submit(&self, mut submission: PropertySubmission) -> RecordResult<PropertyWriteResponse> {
        let unique_id = self
            .id_generator
            .generate(submission.scheme_name.as_deref())
            .await?;
        submission.property_id = Some(unique_id);

        let property = PropertyModel::try_from(&submission)?;
        let installments: Vec<InstallmentModel> =
            submission.payment_history.iter().map(InstallmentModel::from).collect();
        let service_charges: Vec<ServiceChargeModel> = submission
            .service_charge_history
            .iter()
            .map(ServiceChargeModel::from)
            .collect();

        let written = self.write_in_transaction(property, installments, service_charges).await?;
        info!(
            property_id = written.property_id,
            property_unique_id = ?submission.property_id,
            "Property submission stored"
        );

        Ok(PropertyWriteResponse::echo(submission))
    }

    pub async fn list(&self) -> RecordResult<PropertyListResponse<PropertyAggregate>> {
        let executor = Executor::begin(&self.pool).await.map_err(|e| {
            error!(error = %e, "Error opening read transaction");
            RecordError::query(e)
        })?;

        let aggregates = PropertyRepositories::new(&executor).reader().read_all().await?;
        executor.commit().await.map_err(RecordError::query)?;

        Ok(PropertyListResponse::new(aggregates))
    }

    async fn write_in_transaction(
        &self,
        property: PropertyModel,
        installments: Vec<InstallmentModel>,
        service_charges: Vec<ServiceChargeModel>,
    ) -> RecordResult<WriteResult> {
        let executor = Executor::begin(&self.pool).await.map_err(|e| {
            error!(error = %e, "Error opening write transaction");
            RecordError::persistence(WriteStage::Property, e)
        })?;

        let outcome = PropertyRepositories::new(&executor)
            .writer()
            .write(property, installments, service_charges)
            .await;

        match outcome {
            Ok(written) => {
                executor.commit().await.map_err(|e| {
                    error!(property_id = written.property_id, error = %e, "Error committing property aggregate");
                    RecordError::persistence(WriteStage::Children, e)
                })?;
                Ok(written)
            }
            Err(err) => {
                if let Err(rollback_err) = executor.rollback().await {
                    warn!(error = %rollback_err, "Error rolling back failed property write");
                }
                Err(err)
            }
        }
    }
}
