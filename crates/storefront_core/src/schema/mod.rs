//! Wire schemas exchanged with HTTP clients.
//!
//! These shapes are deliberately separate from the persisted records in
//! [`crate::model`]; each entity has explicit mappers in both directions.

pub mod item;
pub mod store;

pub use item::{Item, ItemCreate};
pub use store::{Store, StoreCreate};
