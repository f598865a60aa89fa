use super::item::Item;
use crate::model::store::{NewStore, StoreRecord};
use serde::{Deserialize, Serialize};

/// Inbound payload for `POST /stores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCreate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl From<StoreCreate> for NewStore {
    fn from(value: StoreCreate) -> Self {
        Self { name: value.name }
    }
}

impl From<StoreRecord> for Store {
    fn from(value: StoreRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            items: value.items.into_iter().map(Item::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_store_serializes_empty_items() {
        let store = Store::from(StoreRecord {
            id: 1,
            name: "Acme".to_string(),
            items: Vec::new(),
        });
        assert_eq!(
            serde_json::to_value(&store).expect("store should serialize"),
            json!({"id": 1, "name": "Acme", "items": []})
        );
    }
}
