/// Logging configuration, read from crate-scoped environment variables so
/// deployments can tune recapd without touching other services on the host.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

pub const ENV_VAR: &str = "RECAPD_ENV";
pub const LOG_FORMAT_VAR: &str = "RECAPD_LOG_FORMAT";

impl TracingConfig {
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var(LOG_FORMAT_VAR)
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
