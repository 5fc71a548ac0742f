use chrono::NaiveDate;
use heapless::String as HeaplessString;
use property_records_api::{PropertySubmission, RecordError, RecordResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::identifiable::Identifiable;

/// Longest scheme name in characters, the unit `VARCHAR(100)` counts in
pub const SCHEME_NAME_MAX_LEN: usize = 100;
/// Byte capacity of `scheme_name`, enough for any name of `SCHEME_NAME_MAX_LEN` characters
pub const SCHEME_NAME_MAX_BYTES: usize = SCHEME_NAME_MAX_LEN * 4;
pub const PROPERTY_UNIQUE_ID_MAX_LEN: usize = 128;
pub const MOBILE_NUMBER_MAX_LEN: usize = 20;

/// One real-estate unit: allotment, registration, transfer and construction data.
///
/// Row in the `property` table and root of the property aggregate. Apart from
/// the bounded identifier columns every field is a plain optional scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyModel {
    /// Sequential row id assigned by storage on insert
    /// - 0: not yet inserted
    /// - Non-zero: immutable once assigned
    pub id: i64,
    pub serial_number: Option<String>,
    pub scheme_name: HeaplessString<SCHEME_NAME_MAX_BYTES>,
    /// Business identifier derived from the scheme before the insert.
    /// Must be `Some` by the time the row is written.
    pub property_unique_id: Option<HeaplessString<PROPERTY_UNIQUE_ID_MAX_LEN>>,
    pub allottee_name: Option<String>,
    pub fathers_husbands_name: Option<String>,
    pub permanent_address: Option<String>,
    pub current_address: Option<String>,
    pub mobile_number: Option<HeaplessString<MOBILE_NUMBER_MAX_LEN>>,
    pub property_category: Option<String>,
    pub property_number: Option<String>,
    pub registration_amount: Option<Decimal>,
    pub registration_date: Option<NaiveDate>,
    pub allotment_amount: Option<Decimal>,
    pub allotment_date: Option<NaiveDate>,
    pub sale_price: Option<Decimal>,
    pub freehold_amount: Option<Decimal>,
    pub lease_rent_amount: Option<Decimal>,
    pub park_charge: Option<Decimal>,
    pub corner_charge: Option<Decimal>,
    pub remaining_sale_price_lump_sum: Option<Decimal>,
    pub remaining_sale_price_installments: Option<Decimal>,
    pub interest_amount: Option<Decimal>,
    pub remaining_installment_date: Option<NaiveDate>,
    pub area_square_meter: Option<Decimal>,
    pub possession_date: Option<NaiveDate>,
    pub additional_land_amount: Option<Decimal>,
    pub restoration_charges: Option<Decimal>,
    pub certificate_charges: Option<Decimal>,
    pub registration_charges: Option<Decimal>,
    pub registration_date_2: Option<NaiveDate>,
    pub transfer_name: Option<String>,
    pub transferors_fathers_husbands_name: Option<String>,
    pub address: Option<String>,
    pub inheritance: Option<String>,
    pub transfer_fee: Option<Decimal>,
    pub documentation_fee: Option<Decimal>,
    pub transfer_date: Option<NaiveDate>,
    pub building_plan_approval_date: Option<NaiveDate>,
    pub building_construction: Option<String>,
    /// Deposit date and receipt number as entered, free text
    pub deposit_date: Option<String>,
    pub change_fee: Option<Decimal>,
    pub advertisement_fee: Option<Decimal>,
}

impl Identifiable for PropertyModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

impl PropertyModel {
    /// Empty property for the given scheme, not yet identified or inserted.
    pub fn new(scheme_name: HeaplessString<SCHEME_NAME_MAX_BYTES>) -> Self {
        Self {
            id: 0,
            serial_number: None,
            scheme_name,
            property_unique_id: None,
            allottee_name: None,
            fathers_husbands_name: None,
            permanent_address: None,
            current_address: None,
            mobile_number: None,
            property_category: None,
            property_number: None,
            registration_amount: None,
            registration_date: None,
            allotment_amount: None,
            allotment_date: None,
            sale_price: None,
            freehold_amount: None,
            lease_rent_amount: None,
            park_charge: None,
            corner_charge: None,
            remaining_sale_price_lump_sum: None,
            remaining_sale_price_installments: None,
            interest_amount: None,
            remaining_installment_date: None,
            area_square_meter: None,
            possession_date: None,
            additional_land_amount: None,
            restoration_charges: None,
            certificate_charges: None,
            registration_charges: None,
            registration_date_2: None,
            transfer_name: None,
            transferors_fathers_husbands_name: None,
            address: None,
            inheritance: None,
            transfer_fee: None,
            documentation_fee: None,
            transfer_date: None,
            building_plan_approval_date: None,
            building_construction: None,
            deposit_date: None,
            change_fee: None,
            advertisement_fee: None,
        }
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.property_unique_id.as_ref().map(|id| id.as_str())
    }
}

/// Whether a scheme name is within `SCHEME_NAME_MAX_LEN` characters.
///
/// Shared by identifier generation and submission conversion so that a name
/// accepted by one is never rejected by the other.
pub fn scheme_name_within_limit(scheme_name: &str) -> bool {
    scheme_name.chars().count() <= SCHEME_NAME_MAX_LEN
}

fn bounded<const N: usize>(field: &str, value: &str) -> RecordResult<HeaplessString<N>> {
    HeaplessString::from_str(value).map_err(|_| {
        RecordError::ValidationError(format!("Value for '{field}' is too long (max {N} bytes)"))
    })
}

fn optional_bounded<const N: usize>(
    field: &str,
    value: Option<&str>,
) -> RecordResult<Option<HeaplessString<N>>> {
    value.map(|v| bounded(field, v)).transpose()
}

impl TryFrom<&PropertySubmission> for PropertyModel {
    type Error = RecordError;

    fn try_from(s: &PropertySubmission) -> RecordResult<Self> {
        let scheme_name = s
            .scheme_name
            .as_deref()
            .ok_or_else(|| RecordError::ValidationError("schemeName is required".to_string()))?;
        if !scheme_name_within_limit(scheme_name) {
            return Err(RecordError::ValidationError(format!(
                "Value for 'schemeName' is too long (max {SCHEME_NAME_MAX_LEN} characters)"
            )));
        }

        Ok(Self {
            id: 0,
            serial_number: s.serial_number.clone(),
            scheme_name: bounded("schemeName", scheme_name)?,
            property_unique_id: optional_bounded("propertyId", s.property_id.as_deref())?,
            allottee_name: s.allottee_name.clone(),
            fathers_husbands_name: s.father_husband_name.clone(),
            permanent_address: s.permanent_address.clone(),
            current_address: s.current_address.clone(),
            mobile_number: optional_bounded("mobileNumber", s.mobile_number.as_deref())?,
            property_category: s.property_category.clone(),
            property_number: s.property_number.clone(),
            registration_amount: s.registration_amount,
            registration_date: s.registration_date,
            allotment_amount: s.allotment_amount,
            allotment_date: s.allotment_date,
            sale_price: s.sale_price,
            freehold_amount: s.freehold_amount,
            lease_rent_amount: s.lease_rent_amount,
            park_charge: s.park_charge,
            corner_charge: s.corner_charge,
            remaining_sale_price_lump_sum: s.remaining_sale_price_lump_sum,
            remaining_sale_price_installments: s.remaining_sale_price_installment,
            interest_amount: s.interest_amount,
            remaining_installment_date: s.remaining_installment_date,
            area_square_meter: s.area_square_meter,
            possession_date: s.possession_date,
            additional_land_amount: s.additional_land_amount,
            restoration_charges: s.restoration_charges,
            certificate_charges: s.certificate_charges,
            registration_charges: s.registration_charges,
            registration_date_2: s.registration_date2,
            transfer_name: s.transfer_name.clone(),
            transferors_fathers_husbands_name: s.transferor_father_husband_name.clone(),
            address: s.transferor_address.clone(),
            inheritance: s.inheritance.clone(),
            transfer_fee: s.transfer_charges,
            documentation_fee: s.documentation_charges,
            transfer_date: s.transfer_date,
            building_plan_approval_date: s.building_plan_approval_date,
            building_construction: s.building_construction.clone(),
            deposit_date: s.deposit_date_receipt_number.clone(),
            change_fee: s.change_fee,
            advertisement_fee: s.advertisement_fee,
        })
    }
}
