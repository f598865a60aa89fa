//! Item use-case service.
//!
//! # Invariants
//! - Create refuses names that already exist before touching the table.
//! - Update and delete refuse ids that do not exist.
//! - Update replaces name, price, description and store_id; id never changes.

use super::{deleted_message, Entity, ServiceError, ServiceResult};
use crate::model::item::{ItemId, ItemRecord, NewItem};
use crate::repo::item_repo::ItemRepository;
use log::info;

/// Use-case service wrapper for item CRUD operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an item unless one with the same name exists.
    pub fn create(&self, item: NewItem) -> ServiceResult<ItemRecord> {
        if self.repo.fetch_by_name(&item.name)?.is_some() {
            return Err(ServiceError::Conflict {
                entity: Entity::Item,
            });
        }

        let created = self.repo.create(&item)?;
        info!(
            "event=item_create module=service status=ok item_id={} store_id={}",
            created.id, created.store_id
        );
        Ok(created)
    }

    /// Lists items, or looks one up by exact name.
    ///
    /// With a name filter the result always has exactly one slot, `None` when
    /// nothing matches.
    pub fn list(&self, name: Option<&str>) -> ServiceResult<Vec<Option<ItemRecord>>> {
        match name {
            Some(name) => Ok(vec![self.repo.fetch_by_name(name)?]),
            None => Ok(self.repo.fetch_all()?.into_iter().map(Some).collect()),
        }
    }

    pub fn get(&self, id: ItemId) -> ServiceResult<ItemRecord> {
        self.repo.fetch_by_id(id)?.ok_or(ServiceError::NotFound {
            entity: Entity::Item,
            id,
        })
    }

    /// Overlays the mutable fields onto an existing item and persists it.
    pub fn update(&self, id: ItemId, fields: NewItem) -> ServiceResult<ItemRecord> {
        let mut item = self.get(id)?;
        item.overlay(fields);
        let updated = self.repo.update(&item)?;
        info!(
            "event=item_update module=service status=ok item_id={}",
            updated.id
        );
        Ok(updated)
    }

    /// Deletes an existing item and returns the confirmation message.
    pub fn delete(&self, id: ItemId) -> ServiceResult<String> {
        self.get(id)?;
        self.repo.delete(id)?;
        info!("event=item_delete module=service status=ok item_id={id}");
        Ok(deleted_message(Entity::Item))
    }
}
