//! 公共数据类型

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

// ============ 转发规则 ============

/// 邮件转发规则（重定向）
///
/// `id` 由远端在创建时分配；尚未创建的规则 `id` 为空，序列化时省略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingRule {
    /// 完整源地址 `local@domain`
    pub from: String,
    /// 远端分配的不透明 ID
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// 目标地址
    pub to: String,
}

/// 转发规则所属域名与默认目标地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingSettings {
    /// 托管的邮件域名，如 `example.com`
    pub domain: String,
    /// 随机源地址使用的默认目标地址
    pub default_email: String,
}

impl ForwardingSettings {
    /// 由 local part 拼出完整源地址
    pub fn source_address(&self, local_part: &str) -> String {
        format!("{local_part}@{}", self.domain)
    }
}

// ============ 凭证 ============

/// Provider 凭证
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ProviderCredentials {
    /// OVH API 凭证
    Ovh {
        /// 端点名称（`ovh-eu` 等）或完整 `https://` 基础 URL
        endpoint: String,
        /// Application key
        app_key: String,
        /// Application secret
        app_secret: String,
        /// Consumer key
        consumer_key: String,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ovh {
                endpoint, app_key, ..
            } => f
                .debug_struct("Ovh")
                .field("endpoint", endpoint)
                .field("app_key", &crate::utils::log_sanitizer::mask_secret(app_key))
                .field("app_secret", &"***")
                .field("consumer_key", &"***")
                .finish(),
        }
    }
}

// ============ OVH 端点 ============

/// OVH API 端点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OvhEndpoint {
    OvhEu,
    OvhCa,
    OvhUs,
    KimsufiEu,
    KimsufiCa,
    SoyoustartEu,
    SoyoustartCa,
    /// 显式指定的基础 URL
    Custom(String),
}

impl OvhEndpoint {
    /// 解析端点名称或 URL
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        match value {
            "ovh-eu" => Ok(Self::OvhEu),
            "ovh-ca" => Ok(Self::OvhCa),
            "ovh-us" => Ok(Self::OvhUs),
            "kimsufi-eu" => Ok(Self::KimsufiEu),
            "kimsufi-ca" => Ok(Self::KimsufiCa),
            "soyoustart-eu" => Ok(Self::SoyoustartEu),
            "soyoustart-ca" => Ok(Self::SoyoustartCa),
            url if url.starts_with("https://") || url.starts_with("http://") => {
                Ok(Self::Custom(url.trim_end_matches('/').to_string()))
            }
            other => Err(ProviderError::InvalidParameter {
                provider: "ovh".to_string(),
                param: "endpoint".to_string(),
                detail: format!("unknown endpoint '{other}'"),
            }),
        }
    }

    /// 基础 URL（不带末尾斜杠）
    pub fn base_url(&self) -> &str {
        match self {
            Self::OvhEu => "https://eu.api.ovh.com/1.0",
            Self::OvhCa => "https://ca.api.ovh.com/1.0",
            Self::OvhUs => "https://api.us.ovhcloud.com/1.0",
            Self::KimsufiEu => "https://eu.api.kimsufi.com/1.0",
            Self::KimsufiCa => "https://ca.api.kimsufi.com/1.0",
            Self::SoyoustartEu => "https://eu.api.soyoustart.com/1.0",
            Self::SoyoustartCa => "https://ca.api.soyoustart.com/1.0",
            Self::Custom(url) => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_without_id_omits_it() {
        let rule = ForwardingRule {
            from: "foo@test.xyz".to_string(),
            id: String::new(),
            to: "bar@test.com".to_string(),
        };
        let json = serde_json::to_string(&rule).unwrap_or_default();
        assert_eq!(json, r#"{"from":"foo@test.xyz","to":"bar@test.com"}"#);
    }

    #[test]
    fn rule_deserializes_api_shape() {
        let rule: ForwardingRule = serde_json::from_str(
            r#"{"from":"test@test.xyz","id":"fc2b86af","to":"test@test.com","localCopy":false}"#,
        )
        .unwrap_or_default();
        assert_eq!(rule.id, "fc2b86af");
        assert_eq!(rule.from, "test@test.xyz");
    }

    #[test]
    fn source_address_joins_domain() {
        let settings = ForwardingSettings {
            domain: "test.xyz".to_string(),
            default_email: "whatever@test.com".to_string(),
        };
        assert_eq!(settings.source_address("order"), "order@test.xyz");
    }

    #[test]
    fn endpoint_names_resolve() {
        assert_eq!(
            OvhEndpoint::parse("ovh-eu").map(|e| e.base_url().to_string()),
            Ok("https://eu.api.ovh.com/1.0".to_string())
        );
        assert_eq!(
            OvhEndpoint::parse("https://example.test/1.0/"),
            Ok(OvhEndpoint::Custom("https://example.test/1.0".to_string()))
        );
    }

    #[test]
    fn unknown_endpoint_is_invalid_parameter() {
        assert!(matches!(
            OvhEndpoint::parse("ovh-mars"),
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "endpoint"
        ));
    }

    #[test]
    fn credentials_debug_hides_secrets() {
        let credentials = ProviderCredentials::Ovh {
            endpoint: "ovh-eu".to_string(),
            app_key: "ABCDEFGHIJ".to_string(),
            app_secret: "supersecret".to_string(),
            consumer_key: "consumer".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("supersecret"));
        assert!(!debug.contains("consumer\""));
    }
}
