pub mod repo_impl;
pub mod create;
pub mod load_aggregate_rows;

pub use repo_impl::PropertyRepositoryImpl;
