//! Row mapping for the `licenses` table.

use rusqlite::{Connection, OptionalExtension, Row, ToSql};

use crate::models::LicenseBinding;

/// Trait for constructing a type from a database row.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

pub const LICENSE_COLS: &str = "key, deviceId";

impl FromRow for LicenseBinding {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(LicenseBinding {
            key: row.get(0)?,
            device_id: row.get(1)?,
        })
    }
}

/// First binding matching `filter`, a `WHERE` clause over the `licenses`
/// columns with positional parameters.
pub fn find_binding(
    conn: &Connection,
    filter: &str,
    params: &[&dyn ToSql],
) -> crate::error::Result<Option<LicenseBinding>> {
    let sql = format!("SELECT {} FROM licenses WHERE {} LIMIT 1", LICENSE_COLS, filter);
    conn.query_row(&sql, params, LicenseBinding::from_row)
        .optional()
        .map_err(Into::into)
}
