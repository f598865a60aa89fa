//! Core domain logic for the storefront service.
//! This crate owns persistence, records, wire schemas and use-case rules;
//! transport layers only translate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;

pub use db::{Database, DbError, DbResult, Session};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{ItemId, ItemRecord, NewItem};
pub use model::store::{NewStore, StoreId, StoreRecord};
pub use model::ValidationError;
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::store_repo::{SqliteStoreRepository, StoreRepository};
pub use repo::{RepoError, RepoResult};
pub use service::item_service::ItemService;
pub use service::store_service::StoreService;
pub use service::{Entity, ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
