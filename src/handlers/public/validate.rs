use axum::extract::State;
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::models::BindingRequest;

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

/// POST /validate - Check that the key is bound to exactly this device.
pub async fn validate_license(
    State(state): State<AppState>,
    Json(req): Json<BindingRequest>,
) -> Result<Json<ValidateResponse>> {
    let conn = state.db.get()?;

    let binding = queries::get_binding_by_key_and_device(
        &conn,
        req.key.as_deref(),
        req.device_id.as_deref(),
    )?;

    Ok(Json(ValidateResponse {
        valid: binding.is_some(),
    }))
}
