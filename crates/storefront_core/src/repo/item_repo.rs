//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `ITEMS` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - Name uniqueness and `store_id` integrity are left to SQLite constraints;
//!   callers that need friendlier errors must check first.

use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::item::{ItemId, ItemRecord, NewItem};
use rusqlite::{params, Connection, Row, ToSql};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    name,
    price,
    description,
    store_id
FROM ITEMS";

const ITEM_COLUMNS: &[&str] = &["id", "name", "price", "description", "store_id"];

/// Repository interface for item CRUD operations.
pub trait ItemRepository {
    fn fetch_by_id(&self, id: ItemId) -> RepoResult<Option<ItemRecord>>;
    fn fetch_by_name(&self, name: &str) -> RepoResult<Option<ItemRecord>>;
    fn fetch_all(&self) -> RepoResult<Vec<ItemRecord>>;
    /// Lists the items owned by one store, ordered by id.
    fn fetch_by_store(&self, store_id: i64) -> RepoResult<Vec<ItemRecord>>;
    fn create(&self, item: &NewItem) -> RepoResult<ItemRecord>;
    fn update(&self, item: &ItemRecord) -> RepoResult<ItemRecord>;
    /// Deletes one item. Absent ids are not an error.
    fn delete(&self, id: ItemId) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "ITEMS", ITEM_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn fetch_by_id(&self, id: ItemId) -> RepoResult<Option<ItemRecord>> {
        fetch_one(self.conn, "id = ?1", params![id])
    }

    fn fetch_by_name(&self, name: &str) -> RepoResult<Option<ItemRecord>> {
        fetch_one(self.conn, "name = ?1", params![name])
    }

    fn fetch_all(&self) -> RepoResult<Vec<ItemRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn fetch_by_store(&self, store_id: i64) -> RepoResult<Vec<ItemRecord>> {
        items_for_store(self.conn, store_id)
    }

    fn create(&self, item: &NewItem) -> RepoResult<ItemRecord> {
        item.validate()?;

        self.conn.execute(
            "INSERT INTO ITEMS (
                name,
                price,
                description,
                store_id
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                item.name.as_str(),
                item.price,
                item.description.as_deref(),
                item.store_id,
            ],
        )?;

        Ok(ItemRecord::from_new(
            self.conn.last_insert_rowid(),
            item.clone(),
        ))
    }

    fn update(&self, item: &ItemRecord) -> RepoResult<ItemRecord> {
        item.validate()?;

        let changed = self.conn.execute(
            "UPDATE ITEMS
             SET
                name = ?1,
                price = ?2,
                description = ?3,
                store_id = ?4
             WHERE id = ?5;",
            params![
                item.name.as_str(),
                item.price,
                item.description.as_deref(),
                item.store_id,
                item.id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "ITEMS",
                id: item.id,
            });
        }

        Ok(item.clone())
    }

    fn delete(&self, id: ItemId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM ITEMS WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn fetch_one(
    conn: &Connection,
    predicate: &str,
    bind: &[&dyn ToSql],
) -> RepoResult<Option<ItemRecord>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE {predicate};"))?;
    let mut rows = stmt.query(bind)?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_item_row(row)?));
    }

    Ok(None)
}

pub(crate) fn items_for_store(conn: &Connection, store_id: i64) -> RepoResult<Vec<ItemRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{ITEM_SELECT_SQL} WHERE store_id = ?1 ORDER BY id ASC;"
    ))?;
    let mut rows = stmt.query(params![store_id])?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }

    Ok(items)
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<ItemRecord> {
    let item = ItemRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
        description: row.get("description")?,
        store_id: row.get("store_id")?,
    };
    check_persisted(item)
}

fn check_persisted(item: ItemRecord) -> RepoResult<ItemRecord> {
    item.validate().map_err(|err| {
        RepoError::InvalidData(format!("ITEMS row {} failed validation: {err}", item.id))
    })?;
    Ok(item)
}
