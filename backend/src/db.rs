//! SQLite access for the diary server.
//!
//! Each handler opens its own connection against the configured database
//! file; the schema is created on demand. Records store their field map as
//! a JSON column keyed by record id, which keeps the PATCH handler an
//! overwrite-by-id upsert.

use rusqlite::Connection;

/// Shared handle injected into the Actix application state.
#[derive(Clone)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn connect(&self) -> Result<Connection, String> {
        let conn = Connection::open(&self.path).map_err(|e| e.to_string())?;
        init_schema(&conn)?;
        Ok(conn)
    }
}

pub fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS diary_records (
             id TEXT PRIMARY KEY,
             fields TEXT NOT NULL,
             updated_at INTEGER NOT NULL
         );
         CREATE TABLE IF NOT EXISTS staff (
             id TEXT PRIMARY KEY,
             username TEXT NOT NULL UNIQUE,
             role TEXT NOT NULL
         );",
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creation_is_idempotent() {
        let conn = Connection::open_in_memory().expect("open");
        init_schema(&conn).expect("first");
        init_schema(&conn).expect("second");
    }
}
