use chrono::NaiveDate;
use property_records_api::ServiceChargeEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::{Identifiable, PropertyOwned};

/// One assessed service charge. Row in the `service_charge` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceChargeModel {
    pub id: i64,
    pub property_id: i64,
    pub service_charge_financial_year: Option<String>,
    pub service_charge_amount: Option<Decimal>,
    pub service_charges_late_fee: Option<Decimal>,
    pub service_charges_date: Option<NaiveDate>,
}

impl Identifiable for ServiceChargeModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl PropertyOwned for ServiceChargeModel {
    fn get_property_id(&self) -> i64 {
        self.property_id
    }

    fn set_property_id(&mut self, property_id: i64) {
        self.property_id = property_id;
    }
}

impl From<&ServiceChargeEntry> for ServiceChargeModel {
    fn from(entry: &ServiceChargeEntry) -> Self {
        Self {
            id: 0,
            property_id: 0,
            service_charge_financial_year: entry.financial_year.clone(),
            service_charge_amount: entry.amount,
            service_charges_late_fee: entry.late_fee,
            service_charges_date: entry.date,
        }
    }
}
