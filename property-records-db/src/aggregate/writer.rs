use futures::future::{self, BoxFuture, FutureExt};
use property_records_api::{RecordError, RecordResult, WriteStage};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::identifiable::PropertyOwned;
use crate::models::installment::InstallmentModel;
use crate::models::property::PropertyModel;
use crate::models::service_charge::ServiceChargeModel;
use crate::repository::create::Create;

/// Kind of child row in the fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Installment,
    ServiceCharge,
}

impl fmt::Display for ChildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKind::Installment => f.write_str("installment"),
            ChildKind::ServiceCharge => f.write_str("service charge"),
        }
    }
}

/// One rejected child insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildFailure {
    pub kind: ChildKind,
    /// Position of the entry in its submitted history array
    pub index: usize,
    pub cause: String,
}

/// Outcome of a child fan-out in which at least one insert failed.
///
/// Every insert of the batch was attempted; this lists the ones that failed.
/// Each child is judged on its own: backends sharing one transaction across
/// the batch must isolate every insert so that one rejection does not fail
/// the inserts after it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildInsertFailures {
    pub attempted: usize,
    pub failures: Vec<ChildFailure>,
}

impl fmt::Display for ChildInsertFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} child inserts failed",
            self.failures.len(),
            self.attempted
        )?;
        if let Some(first) = self.failures.first() {
            write!(f, "; first: {} #{}: {}", first.kind, first.index, first.cause)?;
        }
        Ok(())
    }
}

impl std::error::Error for ChildInsertFailures {}

/// Result of a successful aggregate write.
///
/// Echoes what was submitted rather than re-reading it; `property_id` is the
/// row id storage assigned to the new property.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteResult {
    pub property_id: i64,
    pub property: PropertyModel,
    pub installments: Vec<InstallmentModel>,
    pub service_charges: Vec<ServiceChargeModel>,
}

/// Writes one property with its installment and service charge histories.
///
/// The parent insert runs first; its row id is then stamped on every child
/// and all child inserts are issued together. The write succeeds only if
/// every child insert succeeds. The writer never compensates: run it inside
/// a transaction when a failed write must leave nothing behind.
pub struct AggregateWriter<P, I, S> {
    properties: Arc<P>,
    installments: Arc<I>,
    service_charges: Arc<S>,
}

impl<P, I, S> AggregateWriter<P, I, S>
where
    P: Create<PropertyModel>,
    I: Create<InstallmentModel>,
    S: Create<ServiceChargeModel>,
{
    pub fn new(properties: Arc<P>, installments: Arc<I>, service_charges: Arc<S>) -> Self {
        Self {
            properties,
            installments,
            service_charges,
        }
    }

    pub async fn write(
        &self,
        property: PropertyModel,
        installments: Vec<InstallmentModel>,
        service_charges: Vec<ServiceChargeModel>,
    ) -> RecordResult<WriteResult> {
        let unique_id = property
            .unique_id()
            .ok_or_else(|| {
                RecordError::ValidationError(
                    "property_unique_id must be generated before the property is written"
                        .to_string(),
                )
            })?
            .to_string();

        let created = match self.properties.create(property.clone()).await {
            Ok(created) => created,
            Err(cause) => {
                error!(property_unique_id = %unique_id, error = %cause, "Error inserting property row");
                return Err(RecordError::persistence(WriteStage::Property, cause));
            }
        };
        let property_id = created.id;

        let attempted = installments.len() + service_charges.len();
        let failures = self
            .insert_children(property_id, &installments, &service_charges)
            .await;

        if !failures.is_empty() {
            warn!(
                property_id,
                property_unique_id = %unique_id,
                failed = failures.len(),
                attempted,
                "Error inserting child rows"
            );
            return Err(RecordError::persistence(
                WriteStage::Children,
                ChildInsertFailures {
                    attempted,
                    failures,
                },
            ));
        }

        info!(
            property_id,
            property_unique_id = %unique_id,
            installments = installments.len(),
            service_charges = service_charges.len(),
            "Property aggregate written"
        );

        Ok(WriteResult {
            property_id,
            property,
            installments,
            service_charges,
        })
    }

    /// Issues every child insert at once and waits for all of them to settle.
    async fn insert_children(
        &self,
        property_id: i64,
        installments: &[InstallmentModel],
        service_charges: &[ServiceChargeModel],
    ) -> Vec<ChildFailure> {
        let mut operations: Vec<BoxFuture<'_, Result<(), ChildFailure>>> =
            Vec::with_capacity(installments.len() + service_charges.len());

        for (index, installment) in installments.iter().enumerate() {
            operations.push(
                insert_child(
                    self.installments.as_ref(),
                    ChildKind::Installment,
                    index,
                    property_id,
                    installment.clone(),
                )
                .boxed(),
            );
        }
        for (index, service_charge) in service_charges.iter().enumerate() {
            operations.push(
                insert_child(
                    self.service_charges.as_ref(),
                    ChildKind::ServiceCharge,
                    index,
                    property_id,
                    service_charge.clone(),
                )
                .boxed(),
            );
        }

        future::join_all(operations)
            .await
            .into_iter()
            .filter_map(Result::err)
            .collect()
    }
}

async fn insert_child<R, T>(
    repository: &R,
    kind: ChildKind,
    index: usize,
    property_id: i64,
    mut item: T,
) -> Result<(), ChildFailure>
where
    R: Create<T>,
    T: PropertyOwned + Send + 'static,
{
    item.set_property_id(property_id);
    repository
        .create(item)
        .await
        .map(|_| ())
        .map_err(|cause| ChildFailure {
            kind,
            index,
            cause: cause.to_string(),
        })
}
