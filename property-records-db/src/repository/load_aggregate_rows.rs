use async_trait::async_trait;

use crate::models::aggregate::PropertyJoinRow;

/// Repository trait for the property / installment / service charge outer join
///
/// Every property row appears at least once, with both child sides `None`
/// when it has no children.
#[async_trait]
pub trait LoadAggregateRows: Send + Sync {
    /// Load all join rows
    ///
    /// # Returns
    /// * `Ok(Vec<PropertyJoinRow>)` - One row per (property, installment, service charge) combination
    /// * `Err` - An error if the query could not be executed
    async fn load_aggregate_rows(
        &self,
    ) -> Result<Vec<PropertyJoinRow>, Box<dyn std::error::Error + Send + Sync>>;
}
