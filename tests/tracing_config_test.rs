use recapd::infrastructure::observability::{TracingConfig, ENV_VAR, LOG_FORMAT_VAR};

// Environment mutation is process-wide, so all cases run in one test.
#[test]
fn given_crate_scoped_variables_when_reading_config_then_they_drive_it() {
    std::env::remove_var(ENV_VAR);
    std::env::remove_var(LOG_FORMAT_VAR);
    let config = TracingConfig::from_env();
    assert_eq!(config.environment, "development");
    assert!(!config.json_format);

    std::env::set_var(ENV_VAR, "prod");
    std::env::set_var(LOG_FORMAT_VAR, "JSON");
    let config = TracingConfig::from_env();
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);

    std::env::set_var(LOG_FORMAT_VAR, "plain");
    let config = TracingConfig::from_env();
    assert!(!config.json_format);

    std::env::remove_var(ENV_VAR);
    std::env::remove_var(LOG_FORMAT_VAR);
}
