//! Store repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `STORES` table.
//! - Load the derived `items` collection for every store returned.
//!
//! # Invariants
//! - Deleting a store removes its items through `ON DELETE CASCADE`.
//! - Returned records always carry their current items, ordered by id.

use super::item_repo::items_for_store;
use super::{ensure_connection_ready, RepoError, RepoResult};
use crate::model::store::{NewStore, StoreId, StoreRecord};
use rusqlite::{params, Connection, Row};

const STORE_SELECT_SQL: &str = "SELECT id, name FROM STORES";

/// Repository interface for store CRUD operations.
pub trait StoreRepository {
    fn fetch_by_id(&self, id: StoreId) -> RepoResult<Option<StoreRecord>>;
    fn fetch_by_name(&self, name: &str) -> RepoResult<Option<StoreRecord>>;
    fn fetch_all(&self) -> RepoResult<Vec<StoreRecord>>;
    fn create(&self, store: &NewStore) -> RepoResult<StoreRecord>;
    /// Persists the store's own columns. `items` is ignored.
    fn update(&self, store: &StoreRecord) -> RepoResult<StoreRecord>;
    /// Deletes one store and, by cascade, its items. Absent ids are not an
    /// error.
    fn delete(&self, id: StoreId) -> RepoResult<()>;
}

/// SQLite-backed store repository.
pub struct SqliteStoreRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStoreRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "STORES", &["id", "name"])?;
        Ok(Self { conn })
    }

    fn fetch_one(&self, sql: &str, key: &dyn rusqlite::ToSql) -> RepoResult<Option<StoreRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params![key])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let (id, name) = parse_store_row(row)?;
        Ok(Some(self.hydrate(id, name)?))
    }

    fn hydrate(&self, id: StoreId, name: String) -> RepoResult<StoreRecord> {
        let store = StoreRecord {
            id,
            name,
            items: items_for_store(self.conn, id)?,
        };
        store.validate().map_err(|err| {
            RepoError::InvalidData(format!("STORES row {id} failed validation: {err}"))
        })?;
        Ok(store)
    }
}

impl StoreRepository for SqliteStoreRepository<'_> {
    fn fetch_by_id(&self, id: StoreId) -> RepoResult<Option<StoreRecord>> {
        self.fetch_one(&format!("{STORE_SELECT_SQL} WHERE id = ?1;"), &id)
    }

    fn fetch_by_name(&self, name: &str) -> RepoResult<Option<StoreRecord>> {
        self.fetch_one(&format!("{STORE_SELECT_SQL} WHERE name = ?1;"), &name)
    }

    fn fetch_all(&self) -> RepoResult<Vec<StoreRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STORE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut heads = Vec::new();

        while let Some(row) = rows.next()? {
            heads.push(parse_store_row(row)?);
        }

        heads
            .into_iter()
            .map(|(id, name)| self.hydrate(id, name))
            .collect()
    }

    fn create(&self, store: &NewStore) -> RepoResult<StoreRecord> {
        store.validate()?;

        self.conn.execute(
            "INSERT INTO STORES (name) VALUES (?1);",
            params![store.name.as_str()],
        )?;

        Ok(StoreRecord {
            id: self.conn.last_insert_rowid(),
            name: store.name.clone(),
            items: Vec::new(),
        })
    }

    fn update(&self, store: &StoreRecord) -> RepoResult<StoreRecord> {
        store.validate()?;

        let changed = self.conn.execute(
            "UPDATE STORES SET name = ?1 WHERE id = ?2;",
            params![store.name.as_str(), store.id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: "STORES",
                id: store.id,
            });
        }

        self.hydrate(store.id, store.name.clone())
    }

    fn delete(&self, id: StoreId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM STORES WHERE id = ?1;", params![id])?;
        Ok(())
    }
}

fn parse_store_row(row: &Row<'_>) -> RepoResult<(StoreId, String)> {
    Ok((row.get("id")?, row.get("name")?))
}
