// ABOUTME: Tests for selida.yml parsing, discovery, and template generation.
// ABOUTME: Covers required poll policy fields and token indirection.

use selida::config::{self, Config, DEFAULT_API_BASE, EnvValue};
use selida::error::Error;
use std::time::Duration;

const FULL_CONFIG: &str = r#"
repository: octo/site
api_base: https://pages.internal.example
token:
  env: CONFIG_TEST_TOKEN_FULL
  default: fallback-token
preview: true
poll:
  timeout: 10m
  reporting_interval: 5s
  error_count: 10
"#;

#[test]
fn parses_full_config() {
    let config = Config::from_yaml(FULL_CONFIG).unwrap();

    assert_eq!(config.repository.to_string(), "octo/site");
    assert_eq!(config.api_base, "https://pages.internal.example");
    assert!(config.preview);
    assert_eq!(config.poll.timeout, Duration::from_secs(600));
    assert_eq!(config.poll.reporting_interval, Duration::from_secs(5));
    assert_eq!(config.poll.error_count, 10);
}

#[test]
fn minimal_config_uses_defaults() {
    let yaml = r#"
repository: octo/site
poll:
  timeout: 1m
  reporting_interval: 2s
  error_count: 3
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert!(config.token.is_none());
    assert!(!config.preview);
}

#[test]
fn missing_poll_section_is_an_error() {
    let yaml = "repository: octo/site\n";
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn missing_poll_field_is_an_error() {
    // error_count has no default; the lifecycle never invents one.
    let yaml = r#"
repository: octo/site
poll:
  timeout: 1m
  reporting_interval: 2s
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn invalid_repository_is_an_error() {
    let yaml = r#"
repository: not-a-slug
poll:
  timeout: 1m
  reporting_interval: 2s
  error_count: 3
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn literal_token_resolves() {
    let yaml = r#"
repository: octo/site
token: literal-token
poll:
  timeout: 1m
  reporting_interval: 2s
  error_count: 3
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(
        config.resolve_token().unwrap(),
        Some("literal-token".to_string())
    );
}

#[test]
fn env_token_resolves_from_environment() {
    // Var name unique to this test to avoid clashing with parallel tests.
    unsafe { std::env::set_var("CONFIG_TEST_TOKEN_SET", "from-env") };

    let value = EnvValue::FromEnv {
        var: "CONFIG_TEST_TOKEN_SET".to_string(),
        default: None,
    };
    assert_eq!(value.resolve().unwrap(), "from-env");
}

#[test]
fn env_token_falls_back_to_default() {
    let value = EnvValue::FromEnv {
        var: "CONFIG_TEST_TOKEN_UNSET".to_string(),
        default: Some("fallback".to_string()),
    };
    assert_eq!(value.resolve().unwrap(), "fallback");
}

#[test]
fn env_token_without_default_is_an_error() {
    let value = EnvValue::FromEnv {
        var: "CONFIG_TEST_TOKEN_MISSING".to_string(),
        default: None,
    };
    assert!(matches!(
        value.resolve(),
        Err(Error::MissingEnvVar(var)) if var == "CONFIG_TEST_TOKEN_MISSING"
    ));
}

mod discovery {
    use super::*;

    #[test]
    fn finds_selida_yml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("selida.yml"),
            "repository: octo/site\npoll:\n  timeout: 1m\n  reporting_interval: 2s\n  error_count: 3\n",
        )
        .unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repository.to_string(), "octo/site");
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::discover(dir.path()),
            Err(Error::ConfigNotFound(_))
        ));
    }
}

mod init {
    use super::*;

    #[test]
    fn template_round_trips_through_parser() {
        let dir = tempfile::tempdir().unwrap();
        config::init_config(dir.path(), Some("octo/site"), false).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repository.to_string(), "octo/site");
        assert_eq!(config.poll.timeout, Duration::from_secs(600));
        assert!(matches!(config.token, Some(EnvValue::FromEnv { .. })));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        config::init_config(dir.path(), None, false).unwrap();

        assert!(matches!(
            config::init_config(dir.path(), None, false),
            Err(Error::AlreadyExists(_))
        ));
    }

    #[test]
    fn force_overwrites_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        config::init_config(dir.path(), Some("octo/first"), false).unwrap();
        config::init_config(dir.path(), Some("octo/second"), true).unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.repository.to_string(), "octo/second");
    }

    #[test]
    fn invalid_repository_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            config::init_config(dir.path(), Some("no-slash"), false),
            Err(Error::InvalidConfig(_))
        ));
    }
}
