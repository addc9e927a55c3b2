//! license-bind - License key to device binding service
//!
//! Records which device a license key is activated on, answers validation and
//! status queries against those bindings, and checks a separate remote table
//! of pre-provisioned keys.

pub mod config;
pub mod db;
pub mod entitlements;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
