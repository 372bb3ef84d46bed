//! 配置服务
//!
//! 所有配置来自 `FNF_` 前缀的环境变量，`.env` 由入口在加载前读入。

use config::{Config, Environment, Map};
use mailfwd_provider::{ForwardingSettings, ProviderCredentials};
use serde::Deserialize;
use thiserror::Error;

use crate::view::theme::Theme;

const ENV_PREFIX: &str = "FNF";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FNF_{0} environment variable is not defined")]
    Missing(&'static str),

    #[error("FNF_THEME must be 'dark' or 'light', got '{0}'")]
    InvalidTheme(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

/// 应用配置
#[derive(Clone)]
pub struct AppConfig {
    pub ovh_endpoint: String,
    pub ovh_app_key: String,
    pub ovh_app_secret: String,
    pub ovh_consumer_key: String,
    pub domain: String,
    pub default_email: String,
    pub theme: Theme,
}

impl AppConfig {
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::Ovh {
            endpoint: self.ovh_endpoint.clone(),
            app_key: self.ovh_app_key.clone(),
            app_secret: self.ovh_app_secret.clone(),
            consumer_key: self.ovh_consumer_key.clone(),
        }
    }

    pub fn settings(&self) -> ForwardingSettings {
        ForwardingSettings {
            domain: self.domain.clone(),
            default_email: self.default_email.clone(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("credentials", &self.credentials())
            .field("domain", &self.domain)
            .field("default_email", &self.default_email)
            .field("theme", &self.theme)
            .finish()
    }
}

/// 环境变量原始值（键名已去掉前缀并转为小写）
#[derive(Debug, Default, Deserialize)]
struct RawEnv {
    ovh_endpoint: Option<String>,
    ovh_app_key: Option<String>,
    ovh_app_secret: Option<String>,
    ovh_consumer_key: Option<String>,
    ovh_domain: Option<String>,
    default_email: Option<String>,
    theme: Option<String>,
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 环境变量配置服务
#[derive(Debug, Default)]
pub struct EnvConfigService {
    /// 替代进程环境的变量表（测试用）
    source: Option<Map<String, String>>,
}

impl EnvConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: Map<String, String>) -> Self {
        Self {
            source: Some(source),
        }
    }
}

impl ConfigService for EnvConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let raw: RawEnv = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).source(self.source.clone()))
            .build()?
            .try_deserialize()?;

        let theme = match raw.theme.as_deref().map(str::trim) {
            None | Some("") => Theme::default(),
            Some(name) => {
                Theme::parse(name).ok_or_else(|| ConfigError::InvalidTheme(name.to_string()))?
            }
        };

        let config = AppConfig {
            ovh_endpoint: required(raw.ovh_endpoint, "OVH_ENDPOINT")?,
            ovh_app_key: required(raw.ovh_app_key, "OVH_APP_KEY")?,
            ovh_app_secret: required(raw.ovh_app_secret, "OVH_APP_SECRET")?,
            ovh_consumer_key: required(raw.ovh_consumer_key, "OVH_CONSUMER_KEY")?,
            domain: required(raw.ovh_domain, "OVH_DOMAIN")?,
            default_email: required(raw.default_email, "DEFAULT_EMAIL")?,
            theme,
        };

        log::info!("Configuration loaded: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env() -> Map<String, String> {
        [
            ("FNF_OVH_ENDPOINT", "ovh-eu"),
            ("FNF_OVH_APP_KEY", "app-key"),
            ("FNF_OVH_APP_SECRET", "app-secret"),
            ("FNF_OVH_CONSUMER_KEY", "consumer-key"),
            ("FNF_OVH_DOMAIN", "test.xyz"),
            ("FNF_DEFAULT_EMAIL", "whatever@test.com"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn loads_all_values() {
        let config = EnvConfigService::with_source(full_env()).load().unwrap();
        assert_eq!(config.ovh_endpoint, "ovh-eu");
        assert_eq!(config.ovh_app_key, "app-key");
        assert_eq!(config.ovh_app_secret, "app-secret");
        assert_eq!(config.ovh_consumer_key, "consumer-key");
        assert_eq!(config.domain, "test.xyz");
        assert_eq!(config.default_email, "whatever@test.com");
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn missing_variable_is_named() {
        let mut env = full_env();
        env.remove("FNF_OVH_DOMAIN");
        let err = EnvConfigService::with_source(env).load().unwrap_err();
        assert_eq!(err.to_string(), "FNF_OVH_DOMAIN environment variable is not defined");
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let mut env = full_env();
        env.insert("FNF_DEFAULT_EMAIL".into(), "  ".into());
        let err = EnvConfigService::with_source(env).load().unwrap_err();
        assert_eq!(err.to_string(), "FNF_DEFAULT_EMAIL environment variable is not defined");
    }

    #[test]
    fn theme_is_optional_and_validated() {
        let mut env = full_env();
        env.insert("FNF_THEME".into(), "light".into());
        let config = EnvConfigService::with_source(env.clone()).load().unwrap();
        assert_eq!(config.theme, Theme::Light);

        env.insert("FNF_THEME".into(), "neon".into());
        let err = EnvConfigService::with_source(env).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTheme(ref name) if name == "neon"));
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = EnvConfigService::with_source(full_env()).load().unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("app-secret"));
        assert!(!printed.contains("consumer-key"));
    }
}
