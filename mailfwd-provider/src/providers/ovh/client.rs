//! OVH 签名 HTTP 客户端

use async_trait::async_trait;
use reqwest::{Client, Method};
use tokio::sync::OnceCell;

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::{ErrorContext, ProviderErrorMapper};
use crate::types::OvhEndpoint;

/// OVH REST 访问接口
///
/// 返回 2xx 响应的原始文本，非 2xx 已映射为 `ProviderError`。
/// 单元测试用内存实现替换它。
#[async_trait]
pub(crate) trait OvhApi: Send + Sync {
    async fn get(&self, path: &str, ctx: ErrorContext) -> Result<String>;
    async fn post(&self, path: &str, body: String, ctx: ErrorContext) -> Result<String>;
    async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<String>;
}

pub(crate) struct OvhClient {
    client: Client,
    base_url: String,
    app_key: String,
    app_secret: String,
    consumer_key: String,
    /// 服务器时间 - 本地时间（秒），首次签名请求时获取
    time_delta: OnceCell<i64>,
}

impl OvhClient {
    pub fn new(
        endpoint: OvhEndpoint,
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client(super::PROVIDER_NAME)?,
            base_url: endpoint.base_url().to_string(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            consumer_key: consumer_key.into(),
            time_delta: OnceCell::new(),
        })
    }

    /// 与 `/auth/time` 的时钟偏差
    async fn time_delta(&self) -> Result<i64> {
        self.time_delta
            .get_or_try_init(|| async {
                let url = format!("{}/auth/time", self.base_url);
                let request = self.client.get(&url);
                let (status, text) =
                    HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;
                self.handle_response_error(status, &text, ErrorContext::default())?;

                let server_time: i64 = HttpUtils::parse_json(&text, self.provider_name())?;
                let delta = server_time - chrono::Utc::now().timestamp();
                log::debug!("[{}] Clock delta: {delta}s", self.provider_name());
                Ok(delta)
            })
            .await
            .copied()
    }

    /// 执行签名请求
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        ctx: ErrorContext,
    ) -> Result<String> {
        let url = format!("{}{path}", self.base_url);
        let timestamp = chrono::Utc::now().timestamp() + self.time_delta().await?;
        let body = body.unwrap_or_default();
        let signature = super::sign::signature(
            &self.app_secret,
            &self.consumer_key,
            method.as_str(),
            &url,
            &body,
            timestamp,
        );

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("X-Ovh-Application", &self.app_key)
            .header("X-Ovh-Consumer", &self.consumer_key)
            .header("X-Ovh-Timestamp", timestamp.to_string())
            .header("X-Ovh-Signature", signature);
        if !body.is_empty() {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let (status, text) =
            HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url)
                .await?;
        self.handle_response_error(status, &text, ctx)?;
        Ok(text)
    }
}

#[async_trait]
impl OvhApi for OvhClient {
    async fn get(&self, path: &str, ctx: ErrorContext) -> Result<String> {
        self.call(Method::GET, path, None, ctx).await
    }

    async fn post(&self, path: &str, body: String, ctx: ErrorContext) -> Result<String> {
        self.call(Method::POST, path, Some(body), ctx).await
    }

    async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<String> {
        self.call(Method::DELETE, path, None, ctx).await
    }
}
