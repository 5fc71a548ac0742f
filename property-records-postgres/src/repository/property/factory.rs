use std::sync::Arc;

use property_records_db::aggregate::{AggregateReader, AggregateWriter};

use crate::executor::Executor;
use super::{
    installment_repository::InstallmentRepositoryImpl,
    property_repository::PropertyRepositoryImpl,
    service_charge_repository::ServiceChargeRepositoryImpl,
};

pub type PropertyAggregateWriter =
    AggregateWriter<PropertyRepositoryImpl, InstallmentRepositoryImpl, ServiceChargeRepositoryImpl>;
pub type PropertyAggregateReader = AggregateReader<PropertyRepositoryImpl>;

/// Container for the property module repositories.
///
/// All repositories share one executor, so everything they write lands in
/// the same transaction.
pub struct PropertyRepositories {
    pub property_repository: Arc<PropertyRepositoryImpl>,
    pub installment_repository: Arc<InstallmentRepositoryImpl>,
    pub service_charge_repository: Arc<ServiceChargeRepositoryImpl>,
}

impl PropertyRepositories {
    /// Build every property repository on the given executor
    pub fn new(executor: &Executor) -> Self {
        Self {
            property_repository: Arc::new(PropertyRepositoryImpl::new(executor.clone())),
            installment_repository: Arc::new(InstallmentRepositoryImpl::new(executor.clone())),
            service_charge_repository: Arc::new(ServiceChargeRepositoryImpl::new(executor.clone())),
        }
    }

    pub fn writer(&self) -> PropertyAggregateWriter {
        AggregateWriter::new(
            self.property_repository.clone(),
            self.installment_repository.clone(),
            self.service_charge_repository.clone(),
        )
    }

    pub fn reader(&self) -> PropertyAggregateReader {
        AggregateReader::new(self.property_repository.clone())
    }
}
