//! Item record.
//!
//! # Invariants
//! - `store_id` must reference an existing store (foreign key).
//! - `description` is optional and capped at 200 characters.

use super::{validate_name, ValidationError, DESCRIPTION_MAX_CHARS};

pub type ItemId = i64;

/// Field set accepted by item creation. The id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub store_id: i64,
}

/// Persisted item row.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub store_id: i64,
}

impl NewItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_item_fields(&self.name, self.price, self.description.as_deref())
    }
}

impl ItemRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_item_fields(&self.name, self.price, self.description.as_deref())
    }

    /// Replaces every mutable field with `fields`, keeping the id.
    pub fn overlay(&mut self, fields: NewItem) {
        self.name = fields.name;
        self.price = fields.price;
        self.description = fields.description;
        self.store_id = fields.store_id;
    }

    /// Builds the persisted shape from a freshly inserted row id.
    pub fn from_new(id: ItemId, item: NewItem) -> Self {
        Self {
            id,
            name: item.name,
            price: item.price,
            description: item.description,
            store_id: item.store_id,
        }
    }
}

fn validate_item_fields(
    name: &str,
    price: f64,
    description: Option<&str>,
) -> Result<(), ValidationError> {
    validate_name(name)?;
    if !price.is_finite() {
        return Err(ValidationError::NonFinitePrice(price));
    }
    if let Some(description) = description {
        let chars = description.chars().count();
        if chars > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong { chars });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            price: 9.99,
            description: None,
            store_id: 1,
        }
    }

    #[test]
    fn accepts_name_at_limit() {
        assert!(item(&"a".repeat(80)).validate().is_ok());
    }

    #[test]
    fn rejects_blank_and_oversized_names() {
        assert_eq!(item("   ").validate(), Err(ValidationError::EmptyName));
        assert_eq!(
            item(&"a".repeat(81)).validate(),
            Err(ValidationError::NameTooLong { chars: 81 })
        );
    }

    #[test]
    fn overlay_replaces_fields_and_keeps_id() {
        let mut record = ItemRecord::from_new(7, item("chair"));
        record.overlay(NewItem {
            name: "table".to_string(),
            price: 120.5,
            description: Some("oak".to_string()),
            store_id: 3,
        });

        assert_eq!(record.id, 7);
        assert_eq!(record.name, "table");
        assert_eq!(record.price, 120.5);
        assert_eq!(record.description.as_deref(), Some("oak"));
        assert_eq!(record.store_id, 3);
    }

    #[test]
    fn rejects_long_description_and_nan_price() {
        let mut long = item("chair");
        long.description = Some("d".repeat(201));
        assert_eq!(
            long.validate(),
            Err(ValidationError::DescriptionTooLong { chars: 201 })
        );

        let mut nan = item("chair");
        nan.price = f64::NAN;
        assert!(matches!(
            nan.validate(),
            Err(ValidationError::NonFinitePrice(_))
        ));
    }
}
