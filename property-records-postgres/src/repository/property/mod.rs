pub mod factory;
pub mod installment_repository;
pub mod property_repository;
pub mod scheme_sequence_repository;
pub mod service_charge_repository;

#[cfg(test)]
pub mod test_utils;

pub use factory::{PropertyAggregateReader, PropertyAggregateWriter, PropertyRepositories};
pub use installment_repository::InstallmentRepositoryImpl;
pub use property_repository::PropertyRepositoryImpl;
pub use scheme_sequence_repository::SchemeSequenceRepositoryImpl;
pub use service_charge_repository::ServiceChargeRepositoryImpl;
