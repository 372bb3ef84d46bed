//! OVH ForwardingProvider trait 实现

use async_trait::async_trait;
use urlencoding::encode;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, retry_with_fixed_delay};
use crate::traits::{ErrorContext, ForwardingProvider};
use crate::types::ForwardingRule;

use super::types::CreateRedirectionRequest;
use super::{OvhProvider, PROVIDER_NAME};

impl OvhProvider {
    /// `/email/domain/{domain}/redirection`
    fn redirection_path(&self) -> String {
        format!("/email/domain/{}/redirection", encode(&self.settings.domain))
    }

    fn redirection_item_path(&self, id: &str) -> String {
        format!("{}/{}", self.redirection_path(), encode(id))
    }

    fn domain_context(&self) -> ErrorContext {
        ErrorContext {
            domain: Some(self.settings.domain.clone()),
            ..Default::default()
        }
    }

    fn redirection_context(&self, id: &str) -> ErrorContext {
        ErrorContext {
            redirection_id: Some(id.to_string()),
            domain: Some(self.settings.domain.clone()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ForwardingProvider for OvhProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn domain(&self) -> &str {
        &self.settings.domain
    }

    fn default_email(&self) -> &str {
        &self.settings.default_email
    }

    async fn create(&self, local_part: &str, destination: &str) -> Result<()> {
        let from = self.settings.source_address(local_part);
        let body = serde_json::to_string(&CreateRedirectionRequest {
            from: &from,
            to: destination,
            local_copy: false,
        })
        .map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })?;

        let path = self.redirection_path();
        let ctx = ErrorContext {
            from: Some(from.clone()),
            domain: Some(self.settings.domain.clone()),
            ..Default::default()
        };

        log::info!("[{PROVIDER_NAME}] Creating redirection {from} -> {destination}");

        retry_with_fixed_delay(
            PROVIDER_NAME,
            "create redirection",
            self.create_attempts,
            self.retry_delay,
            || {
                let (path, body, ctx) = (&path, body.clone(), ctx.clone());
                async move { self.api.post(path, body, ctx).await.map(|_| ()) }
            },
        )
        .await
    }

    async fn create_on_default_email(&self) -> Result<()> {
        let local_part = self.local_part_source.generate();
        self.create(&local_part, &self.settings.default_email).await
    }

    async fn list(&self) -> Result<Vec<ForwardingRule>> {
        let path = self.redirection_path();
        let text = self.api.get(&path, self.domain_context()).await?;
        let ids: Vec<String> = HttpUtils::parse_json(&text, PROVIDER_NAME)?;

        log::debug!("[{PROVIDER_NAME}] Fetching {} redirection(s)", ids.len());

        let mut rules = Vec::with_capacity(ids.len());
        for id in ids {
            let text = self
                .api
                .get(&self.redirection_item_path(&id), self.redirection_context(&id))
                .await?;
            let mut rule: ForwardingRule = HttpUtils::parse_json(&text, PROVIDER_NAME)?;
            if rule.id.is_empty() {
                rule.id = id;
            }
            rules.push(rule);
        }

        // API 按创建顺序返回，最新的放最前
        rules.reverse();
        Ok(rules)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        log::info!("[{PROVIDER_NAME}] Deleting redirection {id}");
        self.api
            .delete(&self.redirection_item_path(id), self.redirection_context(id))
            .await
            .map(|_| ())
    }
}
