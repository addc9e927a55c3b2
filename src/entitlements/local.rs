use async_trait::async_trait;

use crate::db::{DbPool, queries};
use crate::error::Result;

use super::EntitlementLookup;

/// Entitlement lookup over the local bindings table.
#[derive(Clone)]
pub struct LocalBindings {
    db: DbPool,
}

impl LocalBindings {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntitlementLookup for LocalBindings {
    fn source(&self) -> &'static str {
        "local"
    }

    async fn is_device_licensed(&self, device_id: &str) -> Result<bool> {
        let conn = self.db.get()?;
        let binding = queries::get_binding_by_device(&conn, device_id)?;
        Ok(binding.is_some())
    }
}
