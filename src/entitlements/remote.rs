use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};

use crate::config::EntitlementConfig;
use crate::error::Result;
use crate::models::EntitlementRecord;

use super::{EntitlementError, EntitlementLookup};

/// Value of `is_used` a remote record must carry for its device to count as
/// licensed: the device has redeemed the key.
pub const CONSUMED_POLICY: bool = true;

const SELECT_COLUMNS: &str = "key,used_by,is_used";

/// Read-only PostgREST client for the remote `license_keys` table.
#[derive(Debug, Clone)]
pub struct RemoteEntitlements {
    client: Client,
    url: Option<String>,
    service_key: Option<String>,
    table: String,
    timeout: Duration,
}

impl RemoteEntitlements {
    /// Build the client. Missing URL or credential is not an error here; it
    /// surfaces on the first lookup.
    pub fn new(config: &EntitlementConfig) -> std::result::Result<Self, EntitlementError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(EntitlementError::Http)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            service_key: config.service_key.clone(),
            table: config.table.clone(),
            timeout: config.timeout,
        })
    }

    /// Find at most one record assigned to `device_id` with the consumption
    /// flag set to [`CONSUMED_POLICY`].
    pub async fn find_assigned(
        &self,
        device_id: &str,
    ) -> std::result::Result<Option<EntitlementRecord>, EntitlementError> {
        let url = self
            .url
            .as_deref()
            .ok_or(EntitlementError::NotConfigured("SUPABASE_URL"))?;
        let service_key = self
            .service_key
            .as_deref()
            .ok_or(EntitlementError::NotConfigured("SUPABASE_SERVICE_ROLE"))?;

        let endpoint = format!("{}/rest/v1/{}", url.trim_end_matches('/'), self.table);
        let filters = [
            ("select", SELECT_COLUMNS.to_string()),
            ("used_by", format!("eq.{}", device_id)),
            ("is_used", format!("eq.{}", CONSUMED_POLICY)),
            ("limit", "1".to_string()),
        ];

        let response = self
            .client
            .get(&endpoint)
            .query(&filters[..])
            .header("apikey", service_key)
            .bearer_auth(service_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EntitlementError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<EntitlementRecord> = response.json().await.map_err(|e| self.classify(e))?;
        Ok(rows.into_iter().next())
    }

    fn classify(&self, err: reqwest::Error) -> EntitlementError {
        if err.is_timeout() {
            EntitlementError::Timeout(self.timeout)
        } else if err.is_decode() {
            EntitlementError::Decode(err.to_string())
        } else {
            EntitlementError::Http(err)
        }
    }
}

#[async_trait]
impl EntitlementLookup for RemoteEntitlements {
    fn source(&self) -> &'static str {
        "remote"
    }

    async fn is_device_licensed(&self, device_id: &str) -> Result<bool> {
        let record = self.find_assigned(device_id).await?;
        tracing::debug!(
            "Remote entitlement for device {}: {}",
            device_id,
            record.is_some()
        );
        Ok(record.is_some())
    }
}
