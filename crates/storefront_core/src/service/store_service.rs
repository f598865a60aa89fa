//! Store use-case service.
//!
//! # Invariants
//! - Create refuses names that already exist before touching the table.
//! - Delete refuses ids that do not exist; existing stores take their items
//!   with them.

use super::{deleted_message, Entity, ServiceError, ServiceResult};
use crate::model::store::{NewStore, StoreId, StoreRecord};
use crate::repo::store_repo::StoreRepository;
use log::info;

/// Use-case service wrapper for store CRUD operations.
pub struct StoreService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create(&self, store: NewStore) -> ServiceResult<StoreRecord> {
        if self.repo.fetch_by_name(&store.name)?.is_some() {
            return Err(ServiceError::Conflict {
                entity: Entity::Store,
            });
        }

        let created = self.repo.create(&store)?;
        info!(
            "event=store_create module=service status=ok store_id={}",
            created.id
        );
        Ok(created)
    }

    /// Lists stores, or looks one up by exact name (one slot, `None` on miss).
    pub fn list(&self, name: Option<&str>) -> ServiceResult<Vec<Option<StoreRecord>>> {
        match name {
            Some(name) => Ok(vec![self.repo.fetch_by_name(name)?]),
            None => Ok(self.repo.fetch_all()?.into_iter().map(Some).collect()),
        }
    }

    pub fn get(&self, id: StoreId) -> ServiceResult<StoreRecord> {
        self.repo.fetch_by_id(id)?.ok_or(ServiceError::NotFound {
            entity: Entity::Store,
            id,
        })
    }

    pub fn delete(&self, id: StoreId) -> ServiceResult<String> {
        let store = self.get(id)?;
        self.repo.delete(id)?;
        info!(
            "event=store_delete module=service status=ok store_id={} cascaded_items={}",
            id,
            store.items.len()
        );
        Ok(deleted_message(Entity::Store))
    }
}
