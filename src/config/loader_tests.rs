//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_rlv_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("rlv") && path_str.ends_with("config.toml"),
        "Path should contain 'rlv' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_rlv_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("rlv.log"),
        "Default log path should end with 'rlv.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp_config(
        "rlv_test_config.toml",
        r#"
server_url = "http://logs.internal:9000"
page_size = 250
request_timeout_secs = 3
log_file_path = "/tmp/rlv-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should parse valid TOML")
        .expect("Should return Some for existing file");

    assert_eq!(
        config.server_url.as_deref(),
        Some("http://logs.internal:9000")
    );
    assert_eq!(config.page_size, Some(250));
    assert_eq!(config.request_timeout_secs, Some(3));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/rlv-test.log")));
    assert_eq!(config.logs_dir, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp_config("rlv_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"\n");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).unwrap();
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.server_url, "http://localhost:8000");
    assert_eq!(config.page_size.get(), 100);
    assert_eq!(config.request_timeout, Duration::from_secs(10));
    assert_eq!(config.logs_dir, None);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        server_url: Some("http://example.test".to_string()),
        logs_dir: Some(PathBuf::from("/srv/logs")),
        page_size: Some(50),
        request_timeout_secs: Some(30),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file)).unwrap();

    assert_eq!(resolved.server_url, "http://example.test");
    assert_eq!(resolved.logs_dir, Some(PathBuf::from("/srv/logs")));
    assert_eq!(resolved.page_size.get(), 50);
    assert_eq!(resolved.request_timeout, Duration::from_secs(30));
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_rejects_zero_page_size() {
    let config_file = ConfigFile {
        page_size: Some(0),
        ..ConfigFile::default()
    };
    assert_eq!(
        merge_config(Some(config_file)),
        Err(ConfigError::InvalidPageSize(0))
    );
}

#[test]
#[serial(rlv_env)]
fn apply_env_overrides_respects_server_url_and_logs_dir() {
    let _url = EnvGuard::new("RLV_SERVER_URL");
    let _dir = EnvGuard::new("RLV_LOGS_DIR");
    env::set_var("RLV_SERVER_URL", "http://from-env:1234");
    env::set_var("RLV_LOGS_DIR", "/env/logs");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config.server_url, "http://from-env:1234");
    assert_eq!(config.logs_dir, Some(PathBuf::from("/env/logs")));
    assert_eq!(config.page_size, PageSize::DEFAULT);
}

#[test]
#[serial(rlv_env)]
fn env_server_url_replaces_logs_dir_from_config_file() {
    let _url = EnvGuard::new("RLV_SERVER_URL");
    let _dir = EnvGuard::new("RLV_LOGS_DIR");
    env::set_var("RLV_SERVER_URL", "http://from-env:1234");

    let from_file = ResolvedConfig {
        logs_dir: Some(PathBuf::from("/file/logs")),
        ..ResolvedConfig::default()
    };
    let config = apply_env_overrides(from_file);

    assert_eq!(config.server_url, "http://from-env:1234");
    assert_eq!(config.logs_dir, None);
}

#[test]
#[serial(rlv_env)]
fn env_logs_dir_is_kept_alongside_env_server_url() {
    let _url = EnvGuard::new("RLV_SERVER_URL");
    let _dir = EnvGuard::new("RLV_LOGS_DIR");
    env::set_var("RLV_SERVER_URL", "http://from-env:1234");
    env::set_var("RLV_LOGS_DIR", "/env/logs");

    let from_file = ResolvedConfig {
        logs_dir: Some(PathBuf::from("/file/logs")),
        ..ResolvedConfig::default()
    };
    let config = apply_env_overrides(from_file);

    assert_eq!(config.logs_dir, Some(PathBuf::from("/env/logs")));
}

#[test]
#[serial(rlv_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _url = EnvGuard::new("RLV_SERVER_URL");
    let _dir = EnvGuard::new("RLV_LOGS_DIR");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config, ResolvedConfig::default());
}

#[test]
fn cli_overrides_take_precedence() {
    let base = ResolvedConfig {
        logs_dir: Some(PathBuf::from("/from/file")),
        ..ResolvedConfig::default()
    };

    let config = apply_cli_overrides(
        base,
        CliOverrides {
            server_url: Some("http://cli:1".to_string()),
            logs_dir: None,
            page_size: Some(20),
        },
    )
    .unwrap();

    assert_eq!(config.server_url, "http://cli:1");
    assert_eq!(config.logs_dir, None, "--server wins over a configured dir");
    assert_eq!(config.page_size.get(), 20);
}

#[test]
fn cli_logs_dir_override() {
    let config = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            logs_dir: Some(PathBuf::from("./logs")),
            ..CliOverrides::default()
        },
    )
    .unwrap();
    assert_eq!(config.logs_dir, Some(PathBuf::from("./logs")));
}

#[test]
fn cli_zero_page_size_is_rejected() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        CliOverrides {
            page_size: Some(0),
            ..CliOverrides::default()
        },
    );
    assert_eq!(result, Err(ConfigError::InvalidPageSize(0)));
}

#[test]
#[serial(rlv_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("RLV_CONFIG");

    let explicit = write_temp_config("rlv_test_explicit.toml", "page_size = 10\n");
    let from_env = write_temp_config("rlv_test_env.toml", "page_size = 20\n");
    env::set_var("RLV_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.page_size, Some(10));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(rlv_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("RLV_CONFIG");

    let from_env = write_temp_config("rlv_test_env_only.toml", "page_size = 20\n");
    env::set_var("RLV_CONFIG", &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.page_size, Some(20));

    fs::remove_file(from_env).ok();
}
