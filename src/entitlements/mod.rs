//! "Is this device licensed?" lookups.
//!
//! Two independent sources answer the question and they are never reconciled:
//!
//! - [`LocalBindings`]: the local `licenses` table, written by `/activate`.
//! - [`RemoteEntitlements`]: an externally managed table of pre-provisioned
//!   keys, reached over PostgREST and only ever read.
//!
//! A device can be licensed according to one and not the other. Callers pick
//! the source explicitly; there is no merge policy.

mod local;
mod remote;

pub use local::*;
pub use remote::*;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::Result;

/// Common interface over both entitlement sources.
#[async_trait]
pub trait EntitlementLookup: Send + Sync {
    /// Source name for logging (e.g., "local", "remote")
    fn source(&self) -> &'static str;

    /// Whether the source holds an entitlement for `device_id`.
    async fn is_device_licensed(&self, device_id: &str) -> Result<bool>;
}

/// Failures talking to the remote entitlement source.
#[derive(Error, Debug)]
pub enum EntitlementError {
    #[error("remote entitlement source not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("remote returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}
