pub mod repo_impl;
pub mod create;

pub use repo_impl::ServiceChargeRepositoryImpl;
