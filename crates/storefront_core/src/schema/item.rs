use crate::model::item::{ItemRecord, NewItem};
use serde::{Deserialize, Serialize};

/// Inbound payload for `POST /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: i64,
}

/// Full item shape, used for responses and as the `PUT /items/{id}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub store_id: i64,
}

impl From<ItemCreate> for NewItem {
    fn from(value: ItemCreate) -> Self {
        Self {
            name: value.name,
            price: value.price,
            description: value.description,
            store_id: value.store_id,
        }
    }
}

/// Extracts the mutable field set; the body's `id` is not part of it.
impl From<Item> for NewItem {
    fn from(value: Item) -> Self {
        Self {
            name: value.name,
            price: value.price,
            description: value.description,
            store_id: value.store_id,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(value: ItemRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            store_id: value.store_id,
        }
    }
}
