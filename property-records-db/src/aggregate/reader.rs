use property_records_api::{RecordError, RecordResult};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::aggregate::{assemble_aggregates, PropertyAggregate};
use crate::repository::load_aggregate_rows::LoadAggregateRows;

/// Reconstructs every property with its installment and service charge lists.
pub struct AggregateReader<R> {
    rows: Arc<R>,
}

impl<R: LoadAggregateRows> AggregateReader<R> {
    pub fn new(rows: Arc<R>) -> Self {
        Self { rows }
    }

    /// One aggregate per property, children grouped under their parent and
    /// empty lists for properties without children. A failed query yields
    /// `QueryError` and no partial result.
    pub async fn read_all(&self) -> RecordResult<Vec<PropertyAggregate>> {
        let rows = self.rows.load_aggregate_rows().await.map_err(|cause| {
            error!(error = %cause, "Error fetching property aggregates");
            RecordError::query(cause)
        })?;
        let row_count = rows.len();

        let aggregates = assemble_aggregates(rows);
        info!(
            rows = row_count,
            properties = aggregates.len(),
            "Property aggregates fetched"
        );
        Ok(aggregates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::writer::AggregateWriter;
    use crate::models::aggregate::PropertyJoinRow;
    use crate::models::property::PropertyModel;
    use crate::repository::in_memory::InMemoryPropertyStore;
    use crate::test_utils::{create_test_installment, create_test_property, create_test_service_charge};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::error::Error;

    fn identified_property(unique_id: &str) -> PropertyModel {
        let mut property = create_test_property("Green Valley");
        property.property_unique_id = Some(unique_id.try_into().unwrap());
        property
    }

    #[tokio::test]
    async fn test_read_after_write() -> RecordResult<()> {
        let store = Arc::new(InMemoryPropertyStore::new());
        let writer = AggregateWriter::new(store.clone(), store.clone(), store.clone());
        let reader = AggregateReader::new(store.clone());

        let written = writer
            .write(
                identified_property("GREEN_VALLEY-00001"),
                vec![create_test_installment(100), create_test_installment(200)],
                vec![create_test_service_charge("2023-24", 1200)],
            )
            .await?;

        let aggregates = reader.read_all().await?;

        assert_eq!(aggregates.len(), 1);
        let aggregate = &aggregates[0];
        assert_eq!(aggregate.property.id, written.property_id);
        assert_eq!(aggregate.installments.len(), 2);
        assert_eq!(aggregate.service_charges.len(), 1);
        assert!(aggregate
            .installments
            .iter()
            .all(|i| i.property_id == written.property_id));
        Ok(())
    }

    #[tokio::test]
    async fn test_childless_property_reads_as_empty_lists() -> RecordResult<()> {
        let store = Arc::new(InMemoryPropertyStore::new());
        let writer = AggregateWriter::new(store.clone(), store.clone(), store.clone());
        let reader = AggregateReader::new(store.clone());

        writer
            .write(identified_property("GREEN_VALLEY-00001"), Vec::new(), Vec::new())
            .await?;

        let aggregates = reader.read_all().await?;

        assert_eq!(aggregates.len(), 1);
        let json = serde_json::to_value(&aggregates[0]).unwrap();
        assert_eq!(json["installments"], serde_json::json!([]));
        assert_eq!(json["service_charges"], serde_json::json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn test_single_installment_scenario() -> RecordResult<()> {
        let store = Arc::new(InMemoryPropertyStore::new());
        let writer = AggregateWriter::new(store.clone(), store.clone(), store.clone());
        let reader = AggregateReader::new(store.clone());

        writer
            .write(
                identified_property("GREEN_VALLEY-00001"),
                vec![create_test_installment(100)],
                Vec::new(),
            )
            .await?;
        writer
            .write(
                identified_property("GREEN_VALLEY-00002"),
                vec![create_test_installment(500), create_test_installment(600)],
                vec![
                    create_test_service_charge("2022-23", 1200),
                    create_test_service_charge("2023-24", 1300),
                ],
            )
            .await?;

        let aggregates = reader.read_all().await?;

        assert_eq!(aggregates.len(), 2);
        let first = aggregates
            .iter()
            .find(|a| a.property.unique_id() == Some("GREEN_VALLEY-00001"))
            .unwrap();
        assert_eq!(first.installments.len(), 1);
        assert_eq!(
            first.installments[0].installment_payment_amount,
            Some(Decimal::from(100))
        );
        assert!(first.service_charges.is_empty());

        let second = aggregates
            .iter()
            .find(|a| a.property.unique_id() == Some("GREEN_VALLEY-00002"))
            .unwrap();
        assert_eq!(second.installments.len(), 2);
        assert_eq!(second.service_charges.len(), 2);
        Ok(())
    }

    struct FailingRows;

    #[async_trait]
    impl LoadAggregateRows for FailingRows {
        async fn load_aggregate_rows(
            &self,
        ) -> Result<Vec<PropertyJoinRow>, Box<dyn Error + Send + Sync>> {
            Err("relation \"installments\" does not exist".into())
        }
    }

    #[tokio::test]
    async fn test_failed_query_is_query_error() {
        let reader = AggregateReader::new(Arc::new(FailingRows));

        let result = reader.read_all().await;

        assert!(matches!(result, Err(RecordError::QueryError(_))));
    }
}
