use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENTITLEMENT_TABLE: &str = "license_keys";
pub const DEFAULT_ENTITLEMENT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub entitlements: EntitlementConfig,
}

/// Connection settings for the remote entitlement table.
///
/// URL and credential are optional here; a missing value only fails the
/// first `/check` call that needs it.
#[derive(Debug, Clone)]
pub struct EntitlementConfig {
    pub url: Option<String>,
    pub service_key: Option<String>,
    pub table: String,
    pub timeout: Duration,
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            table: DEFAULT_ENTITLEMENT_TABLE.to_string(),
            timeout: Duration::from_secs(DEFAULT_ENTITLEMENT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_port(env::var("PORT").ok().as_deref());

        let timeout_secs = env::var("ENTITLEMENT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_ENTITLEMENT_TIMEOUT_SECS);

        Self {
            host,
            port,
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "licenses.db".to_string()),
            entitlements: EntitlementConfig {
                url: non_empty(env::var("SUPABASE_URL").ok()),
                service_key: non_empty(env::var("SUPABASE_SERVICE_ROLE").ok()),
                table: env::var("ENTITLEMENT_TABLE")
                    .unwrap_or_else(|_| DEFAULT_ENTITLEMENT_TABLE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
