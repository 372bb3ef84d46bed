use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::ForwardingRule;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: Option<u16>,
    /// 错误码（如 OVH 的 `errorCode`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn with_status(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            code,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 重定向 ID（用于 `RedirectionNotFound`）
    pub redirection_id: Option<String>,
    /// 源地址（用于 `RedirectionExists`）
    pub from: Option<String>,
    /// 域名（用于 `DomainNotFound`）
    pub domain: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 邮件转发 Provider Trait
///
/// 所有方法都直接访问远端，不做任何缓存。
#[async_trait]
pub trait ForwardingProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 托管的邮件域名
    fn domain(&self) -> &str;

    /// 默认目标地址
    fn default_email(&self) -> &str;

    /// 创建转发规则
    ///
    /// `local_part` 与域名拼接成完整源地址。失败时按固定间隔重试，
    /// 返回最后一次尝试的结果。
    async fn create(&self, local_part: &str, destination: &str) -> Result<()>;

    /// 以随机 local part 创建指向默认目标地址的规则
    async fn create_on_default_email(&self) -> Result<()>;

    /// 获取全部转发规则（最新的在前）
    ///
    /// 任意一条详情获取失败即整体失败，不返回部分结果。
    async fn list(&self) -> Result<Vec<ForwardingRule>>;

    /// 按 ID 删除转发规则
    async fn delete(&self, id: &str) -> Result<()>;
}
