//! Persistence handle and scoped per-request sessions.
//!
//! # Responsibility
//! - Keep the location of the store and bootstrap it once at startup.
//! - Hand out independent sessions, one per unit of work.
//!
//! # Invariants
//! - A `Session` owns its connection; dropping it closes the connection on
//!   every exit path, including early returns and unwinding.
//! - Sessions are never shared between callers.

use super::open::{configure_connection, open_db};
use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::Connection;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Read-only handle to the backing SQLite file.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Opens the database file, applying pending migrations.
    ///
    /// The bootstrap connection is closed before returning; request work goes
    /// through [`Database::acquire_session`].
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_db(&path)?;
        drop(conn);
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh session against the store.
    pub fn acquire_session(&self) -> DbResult<Session> {
        let conn = Connection::open(&self.path).map_err(|err| {
            error!(
                "event=session_open module=db status=error error_code=db_open_failed error={}",
                err
            );
            DbError::from(err)
        })?;
        configure_connection(&conn)?;
        debug!("event=session_open module=db status=ok");
        Ok(Session {
            conn,
            opened_at: Instant::now(),
        })
    }

    /// Runs `work` inside one session and releases the session afterwards,
    /// whatever `work` returns.
    pub fn with_session<T, E, F>(&self, work: F) -> Result<T, E>
    where
        E: From<DbError>,
        F: FnOnce(&Session) -> Result<T, E>,
    {
        let session = self.acquire_session()?;
        work(&session)
    }
}

/// Unit-of-work handle owning one SQLite connection.
pub struct Session {
    conn: Connection,
    opened_at: Instant,
}

impl Deref for Session {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!(
            "event=session_close module=db status=ok duration_ms={}",
            self.opened_at.elapsed().as_millis()
        );
    }
}
