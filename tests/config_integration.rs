//! Layered configuration precedence tests.

use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;
use tokenlens::config::AppConfig;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("TOKENLENS_SERVER__PORT");
        env::remove_var("TOKENLENS_SERVER__HOST");
        env::remove_var("TOKENLENS_UI__DEBOUNCE_MS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("DEBOUNCE_MS");
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["tokenlens"]).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.ui.debounce_ms, 300);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("TOKENLENS_SERVER__PORT", "9090");
        env::set_var("TOKENLENS_UI__DEBOUNCE_MS", "750");
    }

    let config = AppConfig::load_from_args(["tokenlens"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.ui.debounce_ms, 750);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_beat_env() {
    clear_env_vars();
    unsafe {
        env::set_var("TOKENLENS_SERVER__PORT", "9090");
    }

    let config =
        AppConfig::load_from_args(["tokenlens", "--port", "4000", "--debounce-ms", "150"])
            .expect("Failed to load config");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.ui.debounce_ms, 150);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join("tokenlens.yaml");
    let config_content = r"
server:
  port: 7070
ui:
  debounce_ms: 500
";
    fs::write(&file_path, config_content).expect("Failed to write temp config");

    let config = AppConfig::load_from_args([
        "tokenlens",
        "--config",
        file_path.to_str().expect("utf-8 path"),
    ])
    .expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.ui.debounce_ms, 500);
}

#[test]
#[serial]
fn test_config_file_env_var() {
    clear_env_vars();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join("tokenlens.yaml");
    fs::write(&file_path, "server:\n  port: 7171\n").expect("Failed to write temp config");

    // CONFIG_FILE reaches the loader through clap's env fallback.
    unsafe {
        env::set_var("CONFIG_FILE", &file_path);
    }

    let config = AppConfig::load_from_args(["tokenlens"]).expect("Failed to load config");
    assert_eq!(config.server.port, 7171);
    // Keys the file leaves out keep their defaults.
    assert_eq!(config.ui.debounce_ms, 300);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join("tokenlens.yaml");
    fs::write(&file_path, "server:\n  port: 7070\n").expect("Failed to write temp config");

    unsafe {
        env::set_var("TOKENLENS_SERVER__PORT", "9191");
    }

    let config = AppConfig::load_from_args([
        "tokenlens",
        "--config",
        file_path.to_str().expect("utf-8 path"),
    ])
    .expect("Failed to load config");
    assert_eq!(config.server.port, 9191);

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["tokenlens", "--config", "/nonexistent/nope.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_unknown_flag_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["tokenlens", "--bogus"]);
    assert!(result.is_err());
}
