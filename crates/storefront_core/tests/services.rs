use storefront_core::db::open_db_in_memory;
use storefront_core::{
    Entity, ItemService, NewItem, NewStore, ServiceError, SqliteItemRepository,
    SqliteStoreRepository, StoreService,
};

fn acme(conn: &rusqlite::Connection) -> i64 {
    StoreService::new(SqliteStoreRepository::try_new(conn).unwrap())
        .create(NewStore {
            name: "Acme".to_string(),
        })
        .unwrap()
        .id
}

fn chair(store_id: i64) -> NewItem {
    NewItem {
        name: "chair".to_string(),
        price: 49.9,
        description: None,
        store_id,
    }
}

#[test]
fn item_create_with_existing_name_conflicts_without_second_row() {
    let conn = open_db_in_memory().unwrap();
    let store_id = acme(&conn);
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    service.create(chair(store_id)).unwrap();
    let err = service.create(chair(store_id)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Conflict {
            entity: Entity::Item
        }
    ));
    assert_eq!(err.detail(), "Item already exists!");
    assert_eq!(service.list(None).unwrap().len(), 1);
}

#[test]
fn store_create_with_existing_name_conflicts() {
    let conn = open_db_in_memory().unwrap();
    acme(&conn);
    let service = StoreService::new(SqliteStoreRepository::try_new(&conn).unwrap());

    let err = service
        .create(NewStore {
            name: "Acme".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.detail(), "Store already exists!");
}

#[test]
fn name_filter_returns_single_slot_even_without_match() {
    let conn = open_db_in_memory().unwrap();
    let store_id = acme(&conn);
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let created = service.create(chair(store_id)).unwrap();

    let hit = service.list(Some("chair")).unwrap();
    assert_eq!(hit, vec![Some(created)]);

    let miss = service.list(Some("sofa")).unwrap();
    assert_eq!(miss, vec![None]);
}

#[test]
fn get_update_delete_report_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store_id = acme(&conn);
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let err = service.get(5).unwrap_err();
    assert_eq!(err.detail(), "Item not found with the given ID");
    assert!(matches!(
        service.update(5, chair(store_id)),
        Err(ServiceError::NotFound {
            entity: Entity::Item,
            id: 5
        })
    ));
    assert!(matches!(
        service.delete(5),
        Err(ServiceError::NotFound { .. })
    ));
}

#[test]
fn update_overlays_fields_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let store_id = acme(&conn);
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let created = service.create(chair(store_id)).unwrap();

    let updated = service
        .update(
            created.id,
            NewItem {
                name: "stool".to_string(),
                price: 15.0,
                description: Some("three legs".to_string()),
                store_id,
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "stool");
    assert_eq!(updated.price, 15.0);
    assert_eq!(updated.description.as_deref(), Some("three legs"));
    assert_eq!(service.get(created.id).unwrap(), updated);
}

#[test]
fn store_delete_cascades_and_returns_message() {
    let conn = open_db_in_memory().unwrap();
    let store_id = acme(&conn);
    let items = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());
    let stores = StoreService::new(SqliteStoreRepository::try_new(&conn).unwrap());

    let created = items.create(chair(store_id)).unwrap();
    assert_eq!(stores.get(store_id).unwrap().items.len(), 1);

    let message = stores.delete(store_id).unwrap();
    assert_eq!(message, "Store deleted successfully!");
    assert!(matches!(
        items.get(created.id),
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        stores.delete(store_id),
        Err(ServiceError::NotFound {
            entity: Entity::Store,
            ..
        })
    ));
}

#[test]
fn item_with_unknown_store_surfaces_repository_error() {
    let conn = open_db_in_memory().unwrap();
    let service = ItemService::new(SqliteItemRepository::try_new(&conn).unwrap());

    let err = service.create(chair(404)).unwrap_err();
    assert!(matches!(err, ServiceError::Repo(_)));
    assert_eq!(service.list(None).unwrap().len(), 0);
}
