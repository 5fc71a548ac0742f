pub mod aggregate;
pub mod models;
pub mod repository;
pub mod test_utils;
pub mod unique_id;

pub use aggregate::*;
pub use models::*;
pub use repository::*;
pub use unique_id::*;
