//! v001 -- Initial schema creation.
//!
//! Creates the single `kv` table.  Card records live under namespaced keys
//! so the table can be shared with unrelated data without collisions.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY NOT NULL,  -- namespaced record key, e.g. storecard_<id>
    value TEXT NOT NULL               -- JSON-serialized record
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
