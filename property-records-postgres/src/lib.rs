pub mod config;
pub mod executor;
pub mod repository;
pub mod service;
pub mod utils;

pub use config::{ConfigError, DatabaseConfig};
pub use executor::Executor;
pub use repository::db_init::{cleanup_database, init_database};
pub use repository::property::{
    InstallmentRepositoryImpl, PropertyRepositories, PropertyRepositoryImpl,
    SchemeSequenceRepositoryImpl, ServiceChargeRepositoryImpl,
};
pub use service::PropertyRecordService;

#[cfg(test)]
pub mod test_helper;
