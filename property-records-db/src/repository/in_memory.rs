use async_trait::async_trait;
use parking_lot::Mutex;
use property_records_api::UniqueViolation;
use rust_decimal::Decimal;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::aggregate::PropertyJoinRow;
use crate::models::installment::InstallmentModel;
use crate::models::property::PropertyModel;
use crate::models::service_charge::ServiceChargeModel;
use crate::repository::create::Create;
use crate::repository::load_aggregate_rows::LoadAggregateRows;

#[derive(Default)]
struct Tables {
    properties: Vec<PropertyModel>,
    installments: Vec<InstallmentModel>,
    service_charges: Vec<ServiceChargeModel>,
    last_property_id: i64,
    last_installment_id: i64,
    last_service_charge_id: i64,
}

impl Tables {
    fn property_exists(&self, property_id: i64) -> bool {
        self.properties.iter().any(|p| p.id == property_id)
    }
}

/// Process-local backend with the constraints of the relational schema.
///
/// Enforces NOT NULL / UNIQUE on `property_unique_id`, the foreign key from
/// both child tables and the non-negative amount checks. Every insert is
/// committed immediately; there are no transactions, so a failed aggregate
/// write leaves the rows inserted before the failure in place.
#[derive(Default)]
pub struct InMemoryPropertyStore {
    tables: Mutex<Tables>,
    child_insert_attempts: AtomicUsize,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_count(&self) -> usize {
        self.tables.lock().properties.len()
    }

    pub fn installments_for(&self, property_id: i64) -> Vec<InstallmentModel> {
        self.tables
            .lock()
            .installments
            .iter()
            .filter(|i| i.property_id == property_id)
            .cloned()
            .collect()
    }

    pub fn service_charges_for(&self, property_id: i64) -> Vec<ServiceChargeModel> {
        self.tables
            .lock()
            .service_charges
            .iter()
            .filter(|s| s.property_id == property_id)
            .cloned()
            .collect()
    }

    /// Number of child inserts received, accepted or rejected.
    pub fn child_insert_attempts(&self) -> usize {
        self.child_insert_attempts.load(Ordering::SeqCst)
    }
}

fn check_non_negative(
    table: &str,
    amounts: &[Option<Decimal>],
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if amounts.iter().flatten().any(|amount| amount.is_sign_negative()) {
        return Err(format!(
            "new row for relation \"{table}\" violates check constraint \"{table}_amounts_non_negative\""
        )
        .into());
    }
    Ok(())
}

fn check_parent(
    tables: &Tables,
    table: &str,
    property_id: i64,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if !tables.property_exists(property_id) {
        return Err(format!(
            "insert on table \"{table}\" violates foreign key constraint \"{table}_property_id_fkey\": property {property_id} does not exist"
        )
        .into());
    }
    Ok(())
}

#[async_trait]
impl Create<PropertyModel> for InMemoryPropertyStore {
    async fn create(
        &self,
        mut item: PropertyModel,
    ) -> Result<PropertyModel, Box<dyn Error + Send + Sync>> {
        let mut tables = self.tables.lock();
        let unique_id = item
            .unique_id()
            .ok_or("null value in column \"property_unique_id\" violates not-null constraint")?;
        if tables.properties.iter().any(|p| p.unique_id() == Some(unique_id)) {
            return Err(Box::new(UniqueViolation {
                constraint: "property_property_unique_id_key".to_string(),
                value: unique_id.to_string(),
            }));
        }

        tables.last_property_id += 1;
        item.id = tables.last_property_id;
        tables.properties.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Create<InstallmentModel> for InMemoryPropertyStore {
    async fn create(
        &self,
        mut item: InstallmentModel,
    ) -> Result<InstallmentModel, Box<dyn Error + Send + Sync>> {
        self.child_insert_attempts.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock();
        check_parent(&tables, "installments", item.property_id)?;
        check_non_negative(
            "installments",
            &[
                item.installment_payment_amount,
                item.installment_interest_amount,
                item.delayed_interest_amount,
            ],
        )?;

        tables.last_installment_id += 1;
        item.id = tables.last_installment_id;
        tables.installments.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Create<ServiceChargeModel> for InMemoryPropertyStore {
    async fn create(
        &self,
        mut item: ServiceChargeModel,
    ) -> Result<ServiceChargeModel, Box<dyn Error + Send + Sync>> {
        self.child_insert_attempts.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock();
        check_parent(&tables, "service_charge", item.property_id)?;
        check_non_negative(
            "service_charge",
            &[item.service_charge_amount, item.service_charges_late_fee],
        )?;

        tables.last_service_charge_id += 1;
        item.id = tables.last_service_charge_id;
        tables.service_charges.push(item.clone());
        Ok(item)
    }
}

#[async_trait]
impl LoadAggregateRows for InMemoryPropertyStore {
    async fn load_aggregate_rows(
        &self,
    ) -> Result<Vec<PropertyJoinRow>, Box<dyn Error + Send + Sync>> {
        let tables = self.tables.lock();
        let mut rows = Vec::new();

        for property in &tables.properties {
            // Same shape as the SQL outer join: missing sides become a single None.
            let installments: Vec<Option<&InstallmentModel>> = {
                let matched: Vec<_> = tables
                    .installments
                    .iter()
                    .filter(|i| i.property_id == property.id)
                    .map(Some)
                    .collect();
                if matched.is_empty() { vec![None] } else { matched }
            };
            let service_charges: Vec<Option<&ServiceChargeModel>> = {
                let matched: Vec<_> = tables
                    .service_charges
                    .iter()
                    .filter(|s| s.property_id == property.id)
                    .map(Some)
                    .collect();
                if matched.is_empty() { vec![None] } else { matched }
            };

            for installment in &installments {
                for service_charge in &service_charges {
                    rows.push(PropertyJoinRow {
                        property: property.clone(),
                        installment: installment.cloned(),
                        service_charge: service_charge.cloned(),
                    });
                }
            }
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_installment, create_test_property};

    fn identified_property(unique_id: &str) -> PropertyModel {
        let mut property = create_test_property("Green Valley");
        property.property_unique_id = Some(unique_id.try_into().unwrap());
        property
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryPropertyStore::new();

        let first = store.create(identified_property("GREEN_VALLEY-00001")).await?;
        let second = store.create(identified_property("GREEN_VALLEY-00002")).await?;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.property_count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_unique_id_is_rejected() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryPropertyStore::new();
        store.create(identified_property("GREEN_VALLEY-00001")).await?;

        let result = store.create(identified_property("GREEN_VALLEY-00001")).await;

        let err = result.unwrap_err();
        let violation = err.downcast_ref::<UniqueViolation>().unwrap();
        assert_eq!(violation.value, "GREEN_VALLEY-00001");
        assert_eq!(store.property_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_orphan_child_is_rejected() {
        let store = InMemoryPropertyStore::new();
        let mut installment = create_test_installment(100);
        installment.property_id = 42;

        let result = store.create(installment).await;

        assert!(result.unwrap_err().to_string().contains("foreign key"));
        assert_eq!(store.child_insert_attempts(), 1);
    }

    #[tokio::test]
    async fn test_join_rows_for_childless_property() -> Result<(), Box<dyn Error + Send + Sync>> {
        let store = InMemoryPropertyStore::new();
        store.create(identified_property("GREEN_VALLEY-00001")).await?;

        let rows = store.load_aggregate_rows().await?;

        assert_eq!(rows.len(), 1);
        assert!(rows[0].installment.is_none());
        assert!(rows[0].service_charge.is_none());
        Ok(())
    }
}
