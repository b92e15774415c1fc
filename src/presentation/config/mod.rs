mod settings;

pub use settings::{
    ServerSettings, Settings, SettingsError, StorageSettings, WatsonxSettings, WhisperSettings,
};
