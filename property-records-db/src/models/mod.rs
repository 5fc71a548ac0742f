pub mod aggregate;
pub mod identifiable;
pub mod installment;
pub mod property;
pub mod service_charge;

// Re-exports
pub use aggregate::*;
pub use identifiable::*;
pub use installment::*;
pub use property::*;
pub use service_charge::*;
