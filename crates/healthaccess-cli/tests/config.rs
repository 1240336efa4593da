use std::path::PathBuf;

use healthaccess_cli::cli::OutputFormat;
use healthaccess_cli::config::{load_config_from, resolve_data_dir, save_config_to, PortalConfig};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(dir.path()).unwrap();
    assert_eq!(config, PortalConfig::default());
    assert_eq!(config.max_saved_results, 10);
    assert_eq!(config.default_format, OutputFormat::Text);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = PortalConfig {
        config_version: 0,
        data_dir: Some(PathBuf::from("/srv/health")),
        max_saved_results: 4,
        default_format: OutputFormat::Html,
    };
    let path = save_config_to(dir.path(), &config).unwrap();
    assert!(path.ends_with("config.json"));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(dir.path()).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.max_saved_results, 4);
    assert_eq!(loaded.default_format, OutputFormat::Html);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_to(dir.path(), &PortalConfig::default()).unwrap();
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"data_dir": "/tmp/ha"}"#).unwrap();

    let config = load_config_from(dir.path()).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/ha")));
    assert_eq!(config.max_saved_results, 10);
    assert_eq!(config.default_format, OutputFormat::Text);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"config_version": 9, "max_saved_results": 10, "default_format": "text"}"#,
    )
    .unwrap();

    let err = load_config_from(dir.path()).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn data_dir_flag_beats_config() {
    let config = PortalConfig {
        data_dir: Some(PathBuf::from("/from/config")),
        ..PortalConfig::default()
    };
    let flag = Some(PathBuf::from("/from/flag"));
    assert_eq!(resolve_data_dir(flag, &config).unwrap(), PathBuf::from("/from/flag"));
    assert_eq!(resolve_data_dir(None, &config).unwrap(), PathBuf::from("/from/config"));
}
