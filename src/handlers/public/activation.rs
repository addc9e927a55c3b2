use axum::extract::State;
use serde::Serialize;

use crate::db::{AppState, queries};
use crate::error::Result;
use crate::extractors::Json;
use crate::models::BindingRequest;

#[derive(Debug, Serialize)]
pub struct ActivateResponse {
    pub success: bool,
}

/// POST /activate - Bind a key to a device.
///
/// Any previous binding for the key is replaced. Inputs are stored as given,
/// including missing fields.
pub async fn activate_license(
    State(state): State<AppState>,
    Json(req): Json<BindingRequest>,
) -> Result<Json<ActivateResponse>> {
    let conn = state.db.get()?;

    queries::upsert_binding(&conn, req.key.as_deref(), req.device_id.as_deref())?;

    tracing::info!(
        "Activated license for device {}",
        req.device_id.as_deref().unwrap_or("<none>")
    );

    Ok(Json(ActivateResponse { success: true }))
}
