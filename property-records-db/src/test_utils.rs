use chrono::NaiveDate;
use heapless::String as HeaplessString;
use rust_decimal::Decimal;

use crate::models::installment::InstallmentModel;
use crate::models::property::PropertyModel;
use crate::models::service_charge::ServiceChargeModel;

pub fn create_test_property(scheme_name: &str) -> PropertyModel {
    let mut property = PropertyModel::new(HeaplessString::try_from(scheme_name).unwrap());
    property.serial_number = Some("1".to_string());
    property.allottee_name = Some("Test Allottee".to_string());
    property.fathers_husbands_name = Some("Test Guardian".to_string());
    property.permanent_address = Some("1 Test Street".to_string());
    property.mobile_number = Some(HeaplessString::try_from("9876543210").unwrap());
    property.property_category = Some("Residential".to_string());
    property.property_number = Some("A-101".to_string());
    property.registration_amount = Some(Decimal::from(25_000));
    property.registration_date = NaiveDate::from_ymd_opt(2021, 4, 1);
    property.allotment_amount = Some(Decimal::from(150_000));
    property.allotment_date = NaiveDate::from_ymd_opt(2021, 5, 10);
    property.sale_price = Some(Decimal::from(1_250_000));
    property.area_square_meter = Some(Decimal::new(11250, 2));
    property.deposit_date = Some("2021-05-02 / R-4411".to_string());
    property
}

pub fn create_test_installment(amount: i64) -> InstallmentModel {
    InstallmentModel {
        id: 0,
        property_id: 0,
        installment_payment_amount: Some(Decimal::from(amount)),
        installment_interest_amount: Some(Decimal::new(450, 2)),
        delayed_interest_amount: Some(Decimal::ZERO),
        installment_date: NaiveDate::from_ymd_opt(2021, 6, 1),
    }
}

pub fn create_test_service_charge(financial_year: &str, amount: i64) -> ServiceChargeModel {
    ServiceChargeModel {
        id: 0,
        property_id: 0,
        service_charge_financial_year: Some(financial_year.to_string()),
        service_charge_amount: Some(Decimal::from(amount)),
        service_charges_late_fee: Some(Decimal::ZERO),
        service_charges_date: NaiveDate::from_ymd_opt(2023, 4, 1),
    }
}
