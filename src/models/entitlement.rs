use serde::{Deserialize, Serialize};

/// A row of the remote `license_keys` table. Owned by the external system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    pub key: String,
    #[serde(default)]
    pub used_by: Option<String>,
    #[serde(default)]
    pub is_used: bool,
}
