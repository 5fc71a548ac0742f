use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting a single row
///
/// Each call is one independent insert statement. The returned entity carries
/// the row id assigned by storage; all other fields are returned as submitted.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Create<InstallmentModel> for InstallmentRepositoryImpl {
///     async fn create(&self, item: InstallmentModel) -> Result<InstallmentModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Create<T: Identifiable + Send + 'static>: Send + Sync {
    /// Insert one entity
    ///
    /// # Arguments
    /// * `item` - The entity to insert, with `id` still 0
    ///
    /// # Returns
    /// * `Ok(T)` - The inserted entity with its row id populated
    /// * `Err` - An error if the statement was rejected by storage
    async fn create(&self, item: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
