pub mod create;
pub mod in_memory;
pub mod load_aggregate_rows;

// Re-exports
pub use create::*;
pub use in_memory::*;
pub use load_aggregate_rows::*;
