use chrono::NaiveDate;
use property_records_api::InstallmentEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::identifiable::{Identifiable, PropertyOwned};

/// One historical payment against a property. Row in the `installments` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentModel {
    pub id: i64,
    /// Owning `property.id`, 0 until the parent row exists
    pub property_id: i64,
    pub installment_payment_amount: Option<Decimal>,
    pub installment_interest_amount: Option<Decimal>,
    pub delayed_interest_amount: Option<Decimal>,
    pub installment_date: Option<NaiveDate>,
}

impl Identifiable for InstallmentModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl PropertyOwned for InstallmentModel {
    fn get_property_id(&self) -> i64 {
        self.property_id
    }

    fn set_property_id(&mut self, property_id: i64) {
        self.property_id = property_id;
    }
}

impl From<&InstallmentEntry> for InstallmentModel {
    fn from(entry: &InstallmentEntry) -> Self {
        Self {
            id: 0,
            property_id: 0,
            installment_payment_amount: entry.installment_amount,
            installment_interest_amount: entry.installment_interest,
            delayed_interest_amount: entry.delayed_interest_amount,
            installment_date: entry.installment_date,
        }
    }
}
