use axum::extract::State;

use crate::db::AppState;
use crate::entitlements::EntitlementLookup;
use crate::error::Result;
use crate::extractors::{Json, Path};

use super::LicensedResponse;

/// GET /status/{device_id} - Whether any local binding exists for the device.
pub async fn license_status(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<LicensedResponse>> {
    let licensed = state.local().is_device_licensed(&device_id).await?;
    Ok(Json(LicensedResponse { licensed }))
}
