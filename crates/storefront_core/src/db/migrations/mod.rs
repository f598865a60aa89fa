//! SQLite migration registry and executor.
//!
//! # Responsibility
//! - Register schema migrations in strictly increasing order.
//! - Apply pending migrations atomically.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_init.sql"),
    },
];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return verify_item_cascade(conn);
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        info!(
            "event=db_migrate module=db status=ok version={}",
            migration.version
        );
    }
    verify_item_cascade(&tx)?;
    tx.commit()?;

    Ok(())
}

/// Rejects an `ITEMS` table whose `store_id` foreign key does not cascade.
///
/// `CREATE TABLE IF NOT EXISTS` adopts tables created by other tools; store
/// deletion depends on the cascade, so a mismatched table is refused rather
/// than stamped.
pub(crate) fn verify_item_cascade(conn: &Connection) -> DbResult<()> {
    let mut stmt = conn.prepare(
        "SELECT \"table\", \"from\", on_delete FROM pragma_foreign_key_list('ITEMS');",
    )?;
    let keys = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let cascades = keys.iter().any(|(table, from, on_delete)| {
        table.eq_ignore_ascii_case("STORES")
            && from.eq_ignore_ascii_case("store_id")
            && on_delete.eq_ignore_ascii_case("CASCADE")
    });
    if !cascades {
        return Err(DbError::IncompatibleSchema(
            "ITEMS.store_id must reference STORES(id) with ON DELETE CASCADE".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
