use rusqlite::Connection;

/// Create the bindings table if it does not exist yet. There are no migrations.
///
/// Switches file-backed databases to WAL so pooled connections can read while
/// an activation writes. In-memory databases stay in `memory` mode.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;

        -- One device per key; activation replaces the row.
        -- deviceId is not unique, several keys may point at the same device.
        CREATE TABLE IF NOT EXISTS licenses (
            key TEXT PRIMARY KEY,
            deviceId TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_licenses_device ON licenses(deviceId);
        "#,
    )
}
