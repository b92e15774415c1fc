use std::path::PathBuf;

/// Runtime configuration, read once at startup. Credentials come exclusively
/// from the environment; there are no source defaults for them.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub watsonx: WatsonxSettings,
    pub whisper: WhisperSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone)]
pub struct WatsonxSettings {
    pub api_key: String,
    pub project_id: String,
    pub region: String,
    pub model_id: String,
    pub max_new_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct WhisperSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub temp_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            server: ServerSettings {
                host: var_or("HOST", "0.0.0.0"),
                port: parsed_var_or("PORT", 3000)?,
                max_upload_mb: parsed_var_or("MAX_UPLOAD_MB", 512)?,
            },
            watsonx: WatsonxSettings {
                api_key: required_var("WATSONX_API_KEY")?,
                project_id: required_var("WATSONX_PROJECT_ID")?,
                region: var_or("WATSONX_REGION", "us-south"),
                model_id: var_or("WATSONX_MODEL", "ibm/granite-3-3-8b-instruct"),
                max_new_tokens: parsed_var_or("SUMMARY_MAX_NEW_TOKENS", 300)?,
            },
            whisper: WhisperSettings {
                api_key: required_var("WHISPER_API_KEY")?,
                base_url: std::env::var("WHISPER_BASE_URL").ok(),
                model: std::env::var("WHISPER_MODEL").ok(),
            },
            storage: StorageSettings {
                temp_dir: PathBuf::from(var_or("TEMP_DIR", "temp")),
            },
        })
    }
}

fn var_or(name: &'static str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required_var(name: &'static str) -> Result<String, SettingsError> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingVar(name))
}

fn parsed_var_or<T: std::str::FromStr>(
    name: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match std::env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidVar(name, raw)),
        _ => Ok(default),
    }
}
