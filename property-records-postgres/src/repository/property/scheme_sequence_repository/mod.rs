pub mod repo_impl;
pub mod generate;

pub use repo_impl::SchemeSequenceRepositoryImpl;
