use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::identifiable::Identifiable;
use crate::models::installment::InstallmentModel;
use crate::models::property::PropertyModel;
use crate::models::service_charge::ServiceChargeModel;

/// One row of `property LEFT JOIN installments LEFT JOIN service_charge`.
///
/// A child side is `None` exactly when its row id column came back NULL, i.e.
/// the property had no child of that kind for this row.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyJoinRow {
    pub property: PropertyModel,
    pub installment: Option<InstallmentModel>,
    pub service_charge: Option<ServiceChargeModel>,
}

/// A property together with its installment and service charge histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAggregate {
    #[serde(flatten)]
    pub property: PropertyModel,
    pub installments: Vec<InstallmentModel>,
    pub service_charges: Vec<ServiceChargeModel>,
}

impl PropertyAggregate {
    pub fn new(property: PropertyModel) -> Self {
        Self {
            property,
            installments: Vec::new(),
            service_charges: Vec::new(),
        }
    }
}

impl Identifiable for PropertyAggregate {
    fn get_id(&self) -> i64 {
        self.property.id
    }
}

/// Folds flat join rows into one aggregate per property.
///
/// Properties keep the order in which they first appear, children keep their
/// row order. With both children joined a property with N installments and M
/// service charges spans N×M rows, so children are de-duplicated by row id.
pub fn assemble_aggregates(rows: Vec<PropertyJoinRow>) -> Vec<PropertyAggregate> {
    let mut aggregates: Vec<PropertyAggregate> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();
    let mut seen_installments: HashSet<i64> = HashSet::new();
    let mut seen_service_charges: HashSet<i64> = HashSet::new();

    for row in rows {
        let PropertyJoinRow {
            property,
            installment,
            service_charge,
        } = row;

        let index = match positions.get(&property.id) {
            Some(&index) => index,
            None => {
                positions.insert(property.id, aggregates.len());
                aggregates.push(PropertyAggregate::new(property));
                aggregates.len() - 1
            }
        };
        let aggregate = &mut aggregates[index];

        if let Some(installment) = installment {
            if seen_installments.insert(installment.id) {
                aggregate.installments.push(installment);
            }
        }
        if let Some(service_charge) = service_charge {
            if seen_service_charges.insert(service_charge.id) {
                aggregate.service_charges.push(service_charge);
            }
        }
    }

    aggregates
}
