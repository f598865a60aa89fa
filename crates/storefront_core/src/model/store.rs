//! Store record and its derived item collection.

use super::item::ItemRecord;
use super::{validate_name, ValidationError};

pub type StoreId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStore {
    pub name: String,
}

/// Persisted store row plus the items whose `store_id` points at it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRecord {
    pub id: StoreId,
    pub name: String,
    /// Derived from `ITEMS.store_id`; never written through the store.
    pub items: Vec<ItemRecord>,
}

impl NewStore {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}

impl StoreRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }
}
