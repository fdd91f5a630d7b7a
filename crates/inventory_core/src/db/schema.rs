//! Fixed schema definition and version check.
//!
//! # Responsibility
//! - Create the `items` table on a fresh database.
//! - Reject databases written with any other schema version.
//!
//! # Invariants
//! - There is exactly one schema version; no upgrade path exists.
//! - Created schema version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

/// The only schema version this binary reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = include_str!("schema_v1.sql");

/// Creates the schema on an empty database, or verifies an existing one.
pub fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    match current_user_version(conn)? {
        0 => {
            let tx = conn.transaction()?;
            tx.execute_batch(SCHEMA_SQL)?;
            tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
            tx.commit()?;
            Ok(())
        }
        SCHEMA_VERSION => Ok(()),
        other => Err(DbError::UnsupportedSchemaVersion {
            db_version: other,
            supported: SCHEMA_VERSION,
        }),
    }
}

/// Reads `PRAGMA user_version` from the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
