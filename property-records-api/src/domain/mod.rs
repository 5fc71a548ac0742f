pub mod response;
pub mod submission;

pub use response::*;
pub use submission::*;
