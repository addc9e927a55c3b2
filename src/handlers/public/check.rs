use axum::extract::State;
use serde::Deserialize;

use crate::db::AppState;
use crate::entitlements::EntitlementLookup;
use crate::error::{AppError, Result, msg};
use crate::extractors::{Json, Query};

use super::LicensedResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQuery {
    #[serde(default)]
    pub device_id: Option<String>,
}

/// GET /check?deviceId=... - Ask the remote entitlement source about a device.
///
/// Only local bindings are consulted by `/status`; this endpoint never looks
/// at them.
pub async fn check_entitlement(
    State(state): State<AppState>,
    Query(query): Query<CheckQuery>,
) -> Result<Json<LicensedResponse>> {
    let device_id = query
        .device_id
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest(msg::MISSING_DEVICE_ID.into()))?;

    let licensed = state.remote.is_device_licensed(&device_id).await?;

    Ok(Json(LicensedResponse { licensed }))
}
