use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One property submission as posted by the records form.
///
/// Carries the property's scalar fields plus its two histories. Field names
/// follow the form's camelCase keys; `propertyId` is the business identifier
/// and is filled in by the identifier generator before the write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySubmission {
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub scheme_name: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default, rename = "allotteName")]
    pub allottee_name: Option<String>,
    #[serde(default)]
    pub father_husband_name: Option<String>,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub current_address: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub property_category: Option<String>,
    #[serde(default)]
    pub property_number: Option<String>,
    #[serde(default)]
    pub registration_amount: Option<Decimal>,
    #[serde(default)]
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub allotment_amount: Option<Decimal>,
    #[serde(default)]
    pub allotment_date: Option<NaiveDate>,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub freehold_amount: Option<Decimal>,
    #[serde(default)]
    pub lease_rent_amount: Option<Decimal>,
    #[serde(default)]
    pub park_charge: Option<Decimal>,
    #[serde(default)]
    pub corner_charge: Option<Decimal>,
    #[serde(default)]
    pub remaining_sale_price_lump_sum: Option<Decimal>,
    #[serde(default)]
    pub remaining_sale_price_installment: Option<Decimal>,
    #[serde(default)]
    pub interest_amount: Option<Decimal>,
    #[serde(default)]
    pub remaining_installment_date: Option<NaiveDate>,
    #[serde(default)]
    pub area_square_meter: Option<Decimal>,
    #[serde(default)]
    pub possession_date: Option<NaiveDate>,
    #[serde(default)]
    pub additional_land_amount: Option<Decimal>,
    #[serde(default)]
    pub restoration_charges: Option<Decimal>,
    #[serde(default)]
    pub certificate_charges: Option<Decimal>,
    #[serde(default)]
    pub registration_charges: Option<Decimal>,
    #[serde(default)]
    pub registration_date2: Option<NaiveDate>,
    #[serde(default)]
    pub transfer_name: Option<String>,
    #[serde(default)]
    pub transferor_father_husband_name: Option<String>,
    #[serde(default)]
    pub transferor_address: Option<String>,
    #[serde(default)]
    pub inheritance: Option<String>,
    #[serde(default)]
    pub transfer_charges: Option<Decimal>,
    #[serde(default)]
    pub documentation_charges: Option<Decimal>,
    #[serde(default)]
    pub transfer_date: Option<NaiveDate>,
    #[serde(default)]
    pub building_plan_approval_date: Option<NaiveDate>,
    #[serde(default)]
    pub building_construction: Option<String>,
    #[serde(default)]
    pub deposit_date_receipt_number: Option<String>,
    #[serde(default)]
    pub change_fee: Option<Decimal>,
    #[serde(default)]
    pub advertisement_fee: Option<Decimal>,

    #[serde(default)]
    pub payment_history: Vec<InstallmentEntry>,
    #[serde(default)]
    pub service_charge_history: Vec<ServiceChargeEntry>,
}

/// One element of `paymentHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentEntry {
    #[serde(default)]
    pub installment_amount: Option<Decimal>,
    #[serde(default)]
    pub installment_interest: Option<Decimal>,
    #[serde(default)]
    pub delayed_interest_amount: Option<Decimal>,
    #[serde(default)]
    pub installment_date: Option<NaiveDate>,
}

/// One element of `serviceChargeHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceChargeEntry {
    #[serde(default)]
    pub financial_year: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub late_fee: Option<Decimal>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
