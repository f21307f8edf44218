// ABOUTME: Configuration types and parsing for selida.yml.
// ABOUTME: Handles YAML parsing, discovery, and template generation.

mod env_value;

pub use env_value::EnvValue;

use crate::deploy::PollPolicy;
use crate::error::{Error, Result};
use crate::types::RepoSlug;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "selida.yml";
pub const CONFIG_FILENAME_ALT: &str = "selida.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".selida/config.yml";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Repository the deployments are scoped to.
    #[serde(deserialize_with = "deserialize_repo_slug")]
    pub repository: RepoSlug,

    /// Base URL of the Pages API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Bearer token for the API, usually indirected through the environment.
    #[serde(default)]
    pub token: Option<EnvValue>,

    /// Deploy as a preview by default.
    #[serde(default)]
    pub preview: bool,

    /// Polling policy. Required: the lifecycle invents no defaults for
    /// timeout, reporting interval, or error budget.
    pub poll: PollPolicy,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Resolve the configured API token, if any.
    pub fn resolve_token(&self) -> Result<Option<String>> {
        self.token.as_ref().map(EnvValue::resolve).transpose()
    }

    pub fn template() -> Self {
        Config {
            repository: RepoSlug::parse("owner/site").unwrap(),
            api_base: default_api_base(),
            token: Some(EnvValue::FromEnv {
                var: "SELIDA_TOKEN".to_string(),
                default: None,
            }),
            preview: false,
            poll: PollPolicy {
                timeout: Duration::from_secs(600),
                reporting_interval: Duration::from_secs(5),
                error_count: 10,
            },
        }
    }
}

pub fn init_config(dir: &Path, repository: Option<&str>, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();

    if let Some(slug) = repository {
        config.repository =
            RepoSlug::parse(slug).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    let yaml = generate_template_yaml(&config);
    std::fs::write(&config_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"repository: {}
api_base: {}
token:
  env: SELIDA_TOKEN
poll:
  timeout: 10m
  reporting_interval: 5s
  error_count: {}
"#,
        config.repository, config.api_base, config.poll.error_count
    )
}

// Custom deserializers

fn deserialize_repo_slug<'de, D>(deserializer: D) -> std::result::Result<RepoSlug, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    RepoSlug::parse(&s).map_err(serde::de::Error::custom)
}
