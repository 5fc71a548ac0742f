use property_records_db::models::property::PropertyModel;
use property_records_db::test_utils::create_test_property;
use property_records_db::unique_id::generate_unique_id;

/// Test property carrying the first identifier of its scheme.
///
/// Tests run inside a rolled back transaction, so the first id never
/// collides with a committed row.
pub fn create_identified_property(scheme_name: &str) -> PropertyModel {
    let mut property = create_test_property(scheme_name);
    let existing: [&str; 0] = [];
    let unique_id = generate_unique_id(Some(scheme_name), &existing).unwrap();
    property.property_unique_id = Some(unique_id.as_str().try_into().unwrap());
    property
}
