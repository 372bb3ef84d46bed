//! Generic HTTP client tools
//!
//! Reusable request processing shared by providers. Each provider signs and
//! builds its own `RequestBuilder`; this module sends it, logs it, classifies
//! transport-level failures and parses JSON bodies.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider_name: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for every response that is not a
    ///   rate limit or gateway failure, including 4xx bodies the caller maps itself
    /// * `Err(ProviderError::Timeout)` / `Err(ProviderError::NetworkError)` on transport failure
    /// * `Err(ProviderError::RateLimited)` for HTTP 429
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String)> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        // Retry-After 需要在读取 body 之前取出
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                provider: provider_name.to_string(),
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] Gateway error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 以固定间隔重试异步操作
///
/// 最多执行 `attempts` 次（至少 1 次），首次成功立即返回；
/// 最后一次失败后不再等待，直接返回该次错误。
pub async fn retry_with_fixed_delay<T, F, Fut>(
    provider_name: &str,
    action: &str,
    attempts: u32,
    delay: Duration,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                log::warn!(
                    "[{provider_name}] {action} failed (attempt {attempt}/{attempts}), retrying in {:.1}s: {e}",
                    delay.as_secs_f32()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{provider_name}] {action} failed after {attempt} attempt(s): {e}");
                } else {
                    log::error!("[{provider_name}] {action} failed after {attempt} attempt(s): {e}");
                }
                return Err(e);
            }
        }
    }
}
