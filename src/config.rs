use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Address of the plans API when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3334";

/// Where the "Escolher plano" buttons send visitors
pub const DEFAULT_REGISTRATION_URL: &str = "http://localhost:3001/register";

/// How long a successful plans response is reused, in seconds
pub const DEFAULT_REVALIDATE_SECONDS: u64 = 300;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub registration: RegistrationConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// `text` or `json`
    pub log_format: String,
}

/// Upstream plans API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// 0 disables caching
    pub revalidate_seconds: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn revalidate_window(&self) -> Duration {
        Duration::from_secs(self.revalidate_seconds)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RegistrationConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                log_level: "info".to_string(),
                log_format: "text".to_string(),
            },
            api: ApiConfig {
                base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout_seconds: 10,
                revalidate_seconds: DEFAULT_REVALIDATE_SECONDS,
            },
            registration: RegistrationConfig {
                url: DEFAULT_REGISTRATION_URL.to_string(),
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }
}

/// Load configuration from defaults, an optional TOML file and `INKMANAGE__*`
/// environment variables (later sources win).
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads environment overrides from `env`
/// instead of the process environment when given.
pub fn load_config_with_env(
    path: &Path,
    env: Option<HashMap<String, String>>,
) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("INKMANAGE")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("server.log_format must be 'text' or 'json', got '{}'", other),
    }

    validate_http_url("api.base_url", &cfg.api.base_url)?;
    validate_http_url("registration.url", &cfg.registration.url)?;

    if cfg.api.timeout_seconds == 0 {
        anyhow::bail!("api.timeout_seconds must be greater than zero");
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("metrics.endpoint must start with '/'");
    }

    Ok(())
}

fn validate_http_url(field: &str, value: &str) -> anyhow::Result<()> {
    let url = Url::parse(value)
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL ('{}'): {}", field, value, e))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => anyhow::bail!("{} must use http or https, got '{}'", field, scheme),
    }
}
