/// Trait for rows identified by a storage-assigned sequential id
pub trait Identifiable {
    /// Returns the row id of the entity, `0` until the row has been inserted
    fn get_id(&self) -> i64;
}

/// Trait for child rows owned by a `property` row
pub trait PropertyOwned: Identifiable {
    /// Returns the id of the owning property row
    fn get_property_id(&self) -> i64;

    /// Points the row at its owning property row
    fn set_property_id(&mut self, property_id: i64);
}
