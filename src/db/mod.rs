mod from_row;
mod schema;
pub mod queries;

pub use schema::init_db;

use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::entitlements::{EntitlementLookup, LocalBindings};

pub type DbPool = Pool<SqliteConnectionManager>;

/// Application state handed to every request handler.
///
/// Built once in `main` and dropped after the server shuts down.
#[derive(Clone)]
pub struct AppState {
    /// Local `licenses` table
    pub db: DbPool,
    /// Remote entitlement table (pre-provisioned keys)
    pub remote: Arc<dyn EntitlementLookup>,
}

impl AppState {
    pub fn new(db: DbPool, remote: Arc<dyn EntitlementLookup>) -> Self {
        Self { db, remote }
    }

    /// Entitlement lookup backed by the local bindings table.
    pub fn local(&self) -> LocalBindings {
        LocalBindings::new(self.db.clone())
    }
}

pub fn create_pool(database_path: &str) -> Result<DbPool, r2d2::Error> {
    let manager = SqliteConnectionManager::file(database_path);
    Pool::builder().max_size(10).build(manager)
}
