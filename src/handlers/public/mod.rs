mod activation;
mod check;
mod status;
mod validate;

pub use activation::*;
pub use check::*;
pub use status::*;
pub use validate::*;

use axum::{routing::{get, post}, Json, Router};
use serde::Serialize;

use crate::db::AppState;

#[derive(Debug, Serialize)]
pub struct LicensedResponse {
    pub licensed: bool,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/activate", post(activate_license))
        .route("/validate", post(validate_license))
        .route("/status/{device_id}", get(license_status))
        // Remote entitlement source, independent of local bindings
        .route("/check", get(check_entitlement))
}
