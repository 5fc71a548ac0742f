use async_trait::async_trait;
use property_records_db::models::property::PropertyModel;
use property_records_db::repository::create::Create;
use std::error::Error;
use tracing::debug;

use super::repo_impl::PropertyRepositoryImpl;

impl PropertyRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &PropertyRepositoryImpl,
        mut item: PropertyModel,
    ) -> Result<PropertyModel, Box<dyn Error + Send + Sync>> {
        let unique_id = item
            .unique_id()
            .ok_or("property_unique_id is required for PropertyModel")?
            .to_string();

        let query = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO property
            (serial_number, scheme_name, property_unique_id, allottee_name, fathers_husbands_name, permanent_address, current_address, mobile_number, property_category, property_number, registration_amount, registration_date, allotment_amount, allotment_date, sale_price, freehold_amount, lease_rent_amount, park_charge, corner_charge, remaining_sale_price_lump_sum, remaining_sale_price_installments, interest_amount, remaining_installment_date, area_square_meter, possession_date, additional_land_amount, restoration_charges, certificate_charges, registration_charges, registration_date_2, transfer_name, transferors_fathers_husbands_name, address, inheritance, transfer_fee, documentation_fee, transfer_date, building_plan_approval_date, building_construction, deposit_date, change_fee, advertisement_fee)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35, $36, $37, $38, $39, $40, $41, $42)
            RETURNING id
            "#,
        )
        .bind(item.serial_number.as_deref())
        .bind(item.scheme_name.as_str())
        .bind(unique_id.as_str())
        .bind(item.allottee_name.as_deref())
        .bind(item.fathers_husbands_name.as_deref())
        .bind(item.permanent_address.as_deref())
        .bind(item.current_address.as_deref())
        .bind(item.mobile_number.as_deref())
        .bind(item.property_category.as_deref())
        .bind(item.property_number.as_deref())
        .bind(item.registration_amount)
        .bind(item.registration_date)
        .bind(item.allotment_amount)
        .bind(item.allotment_date)
        .bind(item.sale_price)
        .bind(item.freehold_amount)
        .bind(item.lease_rent_amount)
        .bind(item.park_charge)
        .bind(item.corner_charge)
        .bind(item.remaining_sale_price_lump_sum)
        .bind(item.remaining_sale_price_installments)
        .bind(item.interest_amount)
        .bind(item.remaining_installment_date)
        .bind(item.area_square_meter)
        .bind(item.possession_date)
        .bind(item.additional_land_amount)
        .bind(item.restoration_charges)
        .bind(item.certificate_charges)
        .bind(item.registration_charges)
        .bind(item.registration_date_2)
        .bind(item.transfer_name.as_deref())
        .bind(item.transferors_fathers_husbands_name.as_deref())
        .bind(item.address.as_deref())
        .bind(item.inheritance.as_deref())
        .bind(item.transfer_fee)
        .bind(item.documentation_fee)
        .bind(item.transfer_date)
        .bind(item.building_plan_approval_date)
        .bind(item.building_construction.as_deref())
        .bind(item.deposit_date.as_deref())
        .bind(item.change_fee)
        .bind(item.advertisement_fee);

        let id = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
            query.fetch_one(&mut **transaction).await?
        };

        debug!(property_id = id, property_unique_id = %unique_id, "Inserted property row");
        item.id = id;
        Ok(item)
    }
}

#[async_trait]
impl Create<PropertyModel> for PropertyRepositoryImpl {
    async fn create(
        &self,
        item: PropertyModel,
    ) -> Result<PropertyModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
