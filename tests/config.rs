use mailcaster::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server.base_url, "http://localhost:8080");
    assert_eq!(config.server.timeout_seconds, 30);
    assert_eq!(config.ui.picker_width, 30);
    assert!(config.ui.fetch_campaigns_on_startup);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    // Picker width outside its bounds
    config.ui.picker_width = 5;
    assert!(config.validate().is_err());
    config.ui.picker_width = 80;
    assert!(config.validate().is_err());
    config.ui.picker_width = 30;

    // URL must carry a scheme
    config.server.base_url = "localhost:8080".to_string();
    assert!(config.validate().is_err());
    config.server.base_url = "https://mail.example.com".to_string();
    assert!(config.validate().is_ok());

    config.server.timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[server]
base_url = "https://mailer.internal:9000"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.server.base_url, "https://mailer.internal:9000");
    assert!(config.logging.enabled);

    // Unspecified sections keep their defaults
    assert_eq!(config.server.timeout_seconds, 30);
    assert_eq!(config.ui.picker_width, 30);
    assert!(config.ui.fetch_campaigns_on_startup);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailcaster.toml");
    std::fs::write(
        &path,
        r#"
[ui]
picker_width = 25
fetch_campaigns_on_startup = false
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.picker_width, 25);
    assert!(!config.ui.fetch_campaigns_on_startup);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailcaster.toml");
    std::fs::write(&path, "[ui]\npicker_width = 5\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_config_serialization_round_trip() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:8080\""));

    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.ui.picker_width, config.ui.picker_width);
}
