//! OVHcloud email domain redirection provider

mod client;
mod error;
mod provider;
mod sign;
mod types;

use std::sync::Arc;
use std::time::Duration;

use crate::error::{ProviderError, Result};
use crate::local_part::{LocalPartSource, ThreadRngLocalPart};
use crate::types::{ForwardingSettings, OvhEndpoint};

use client::{OvhApi, OvhClient};

pub(crate) const PROVIDER_NAME: &str = "ovh";
/// 创建转发的最大尝试次数
pub(crate) const DEFAULT_CREATE_ATTEMPTS: u32 = 3;
/// 两次尝试之间的固定间隔
pub(crate) const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// OVH Provider
pub struct OvhProvider {
    pub(crate) api: Arc<dyn OvhApi>,
    pub(crate) settings: ForwardingSettings,
    pub(crate) local_part_source: Arc<dyn LocalPartSource>,
    pub(crate) create_attempts: u32,
    pub(crate) retry_delay: Duration,
}

impl OvhProvider {
    /// 使用默认重试策略和随机来源创建
    pub fn new(
        endpoint: OvhEndpoint,
        app_key: String,
        app_secret: String,
        consumer_key: String,
        settings: ForwardingSettings,
    ) -> Result<Self> {
        Self::builder(settings)
            .credentials(endpoint, app_key, app_secret, consumer_key)
            .build()
    }

    pub fn builder(settings: ForwardingSettings) -> OvhProviderBuilder {
        OvhProviderBuilder::new(settings)
    }
}

struct OvhCredentials {
    endpoint: OvhEndpoint,
    app_key: String,
    app_secret: String,
    consumer_key: String,
}

/// [`OvhProvider`] 构建器
pub struct OvhProviderBuilder {
    settings: ForwardingSettings,
    credentials: Option<OvhCredentials>,
    api: Option<Arc<dyn OvhApi>>,
    local_part_source: Arc<dyn LocalPartSource>,
    create_attempts: u32,
    retry_delay: Duration,
}

impl OvhProviderBuilder {
    pub fn new(settings: ForwardingSettings) -> Self {
        Self {
            settings,
            credentials: None,
            api: None,
            local_part_source: Arc::new(ThreadRngLocalPart),
            create_attempts: DEFAULT_CREATE_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    #[must_use]
    pub fn credentials(
        mut self,
        endpoint: OvhEndpoint,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Self {
        self.credentials = Some(OvhCredentials {
            endpoint,
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            consumer_key: consumer_key.into(),
        });
        self
    }

    /// 替换随机 local part 来源
    #[must_use]
    pub fn local_part_source(mut self, source: Arc<dyn LocalPartSource>) -> Self {
        self.local_part_source = source;
        self
    }

    #[must_use]
    pub fn create_attempts(mut self, attempts: u32) -> Self {
        self.create_attempts = attempts;
        self
    }

    #[must_use]
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    #[cfg(test)]
    pub(crate) fn api(mut self, api: Arc<dyn OvhApi>) -> Self {
        self.api = Some(api);
        self
    }

    pub fn build(self) -> Result<OvhProvider> {
        if self.settings.domain.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "domain".to_string(),
                detail: "domain must not be empty".to_string(),
            });
        }

        let api: Arc<dyn OvhApi> = match (self.api, self.credentials) {
            (Some(api), _) => api,
            (None, Some(c)) => Arc::new(OvhClient::new(
                c.endpoint,
                c.app_key,
                c.app_secret,
                c.consumer_key,
            )?),
            (None, None) => {
                return Err(ProviderError::InvalidParameter {
                    provider: PROVIDER_NAME.to_string(),
                    param: "credentials".to_string(),
                    detail: "no OVH credentials configured".to_string(),
                });
            }
        };

        Ok(OvhProvider {
            api,
            settings: self.settings,
            local_part_source: self.local_part_source,
            create_attempts: self.create_attempts,
            retry_delay: self.retry_delay,
        })
    }
}
