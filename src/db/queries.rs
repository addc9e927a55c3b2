use rusqlite::{Connection, params};

use crate::error::Result;
use crate::models::LicenseBinding;

use super::from_row::find_binding;

// ============ Bindings ============

/// Bind `key` to `device_id`, replacing whatever the key was bound to before.
///
/// Values are stored as given; `None` becomes `NULL`. A `NULL` key never
/// conflicts with an existing row, so it always inserts.
pub fn upsert_binding(conn: &Connection, key: Option<&str>, device_id: Option<&str>) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO licenses (key, deviceId) VALUES (?1, ?2)",
        params![key, device_id],
    )?;
    Ok(())
}

pub fn get_binding_by_key(conn: &Connection, key: Option<&str>) -> Result<Option<LicenseBinding>> {
    find_binding(conn, "key = ?1", &[&key])
}

/// Exact match on both columns. `NULL` on either side never matches.
pub fn get_binding_by_key_and_device(
    conn: &Connection,
    key: Option<&str>,
    device_id: Option<&str>,
) -> Result<Option<LicenseBinding>> {
    find_binding(conn, "key = ?1 AND deviceId = ?2", &[&key, &device_id])
}

/// Any one binding for the device. Which one is unspecified when several keys
/// are bound to it.
pub fn get_binding_by_device(conn: &Connection, device_id: &str) -> Result<Option<LicenseBinding>> {
    find_binding(conn, "deviceId = ?1", &[&device_id])
}

pub fn count_bindings(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM licenses", [], |row| row.get(0))
        .map_err(Into::into)
}
