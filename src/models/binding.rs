use serde::{Deserialize, Serialize};

/// A row of the local `licenses` table.
///
/// Both columns are nullable in practice: activation stores whatever the
/// caller sent, and SQLite accepts `NULL` in a text primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseBinding {
    pub key: Option<String>,
    pub device_id: Option<String>,
}

/// Body of `POST /activate` and `POST /validate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingRequest {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
}
