use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_joined_id, get_optional_heapless_string, TryFromRow};
use property_records_db::models::aggregate::PropertyJoinRow;
use property_records_db::models::installment::InstallmentModel;
use property_records_db::models::property::PropertyModel;
use property_records_db::models::service_charge::ServiceChargeModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub struct PropertyRepositoryImpl {
    pub executor: Executor,
}

impl PropertyRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for PropertyModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(PropertyModel {
            id: row.try_get("id")?,
            serial_number: row.try_get("serial_number")?,
            scheme_name: get_heapless_string(row, "scheme_name")?,
            property_unique_id: get_optional_heapless_string(row, "property_unique_id")?,
            allottee_name: row.try_get("allottee_name")?,
            fathers_husbands_name: row.try_get("fathers_husbands_name")?,
            permanent_address: row.try_get("permanent_address")?,
            current_address: row.try_get("current_address")?,
            mobile_number: get_optional_heapless_string(row, "mobile_number")?,
            property_category: row.try_get("property_category")?,
            property_number: row.try_get("property_number")?,
            registration_amount: row.try_get("registration_amount")?,
            registration_date: row.try_get("registration_date")?,
            allotment_amount: row.try_get("allotment_amount")?,
            allotment_date: row.try_get("allotment_date")?,
            sale_price: row.try_get("sale_price")?,
            freehold_amount: row.try_get("freehold_amount")?,
            lease_rent_amount: row.try_get("lease_rent_amount")?,
            park_charge: row.try_get("park_charge")?,
            corner_charge: row.try_get("corner_charge")?,
            remaining_sale_price_lump_sum: row.try_get("remaining_sale_price_lump_sum")?,
            remaining_sale_price_installments: row.try_get("remaining_sale_price_installments")?,
            interest_amount: row.try_get("interest_amount")?,
            remaining_installment_date: row.try_get("remaining_installment_date")?,
            area_square_meter: row.try_get("area_square_meter")?,
            possession_date: row.try_get("possession_date")?,
            additional_land_amount: row.try_get("additional_land_amount")?,
            restoration_charges: row.try_get("restoration_charges")?,
            certificate_charges: row.try_get("certificate_charges")?,
            registration_charges: row.try_get("registration_charges")?,
            registration_date_2: row.try_get("registration_date_2")?,
            transfer_name: row.try_get("transfer_name")?,
            transferors_fathers_husbands_name: row.try_get("transferors_fathers_husbands_name")?,
            address: row.try_get("address")?,
            inheritance: row.try_get("inheritance")?,
            transfer_fee: row.try_get("transfer_fee")?,
            documentation_fee: row.try_get("documentation_fee")?,
            transfer_date: row.try_get("transfer_date")?,
            building_plan_approval_date: row.try_get("building_plan_approval_date")?,
            building_construction: row.try_get("building_construction")?,
            deposit_date: row.try_get("deposit_date")?,
            change_fee: row.try_get("change_fee")?,
            advertisement_fee: row.try_get("advertisement_fee")?,
        })
    }
}

impl TryFromRow<PgRow> for PropertyJoinRow {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let property = PropertyModel::try_from_row(row)?;

        let installment = match get_joined_id(row, "installment_id")? {
            Some(id) => Some(InstallmentModel {
                id,
                property_id: row.try_get("installment_property_id")?,
                installment_payment_amount: row.try_get("installment_payment_amount")?,
                installment_interest_amount: row.try_get("installment_interest_amount")?,
                delayed_interest_amount: row.try_get("delayed_interest_amount")?,
                installment_date: row.try_get("installment_date")?,
            }),
            None => None,
        };

        let service_charge = match get_joined_id(row, "service_charge_id")? {
            Some(id) => Some(ServiceChargeModel {
                id,
                property_id: row.try_get("service_charge_property_id")?,
                service_charge_financial_year: row.try_get("service_charge_financial_year")?,
                service_charge_amount: row.try_get("service_charge_amount")?,
                service_charges_late_fee: row.try_get("service_charges_late_fee")?,
                service_charges_date: row.try_get("service_charges_date")?,
            }),
            None => None,
        };

        Ok(PropertyJoinRow {
            property,
            installment,
            service_charge,
        })
    }
}
