//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use mailfwd_provider::{
    ForwardingProvider, ForwardingRule, ForwardingSettings, ProviderCredentials, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试所需的全部环境变量
pub const OVH_VARS: [&str; 6] = [
    "FNF_OVH_ENDPOINT",
    "FNF_OVH_APP_KEY",
    "FNF_OVH_APP_SECRET",
    "FNF_OVH_CONSUMER_KEY",
    "FNF_OVH_DOMAIN",
    "FNF_DEFAULT_EMAIL",
];

/// 生成唯一的测试 local part
pub fn generate_test_local_part() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}", &uuid.to_string()[..8])
}

/// 在列表中按源地址查找规则
pub fn find_by_from<'a>(rules: &'a [ForwardingRule], from: &str) -> Option<&'a ForwardingRule> {
    rules.iter().find(|r| r.from == from)
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn ForwardingProvider>,
    pub domain: String,
    pub default_email: String,
}

impl TestContext {
    /// 从 `FNF_*` 环境变量创建 OVH 测试上下文
    pub fn ovh() -> Option<Self> {
        let credentials = ProviderCredentials::Ovh {
            endpoint: env::var("FNF_OVH_ENDPOINT").ok()?,
            app_key: env::var("FNF_OVH_APP_KEY").ok()?,
            app_secret: env::var("FNF_OVH_APP_SECRET").ok()?,
            consumer_key: env::var("FNF_OVH_CONSUMER_KEY").ok()?,
        };
        let domain = env::var("FNF_OVH_DOMAIN").ok()?;
        let default_email = env::var("FNF_DEFAULT_EMAIL").ok()?;

        let provider = create_provider(
            credentials,
            ForwardingSettings {
                domain: domain.clone(),
                default_email: default_email.clone(),
            },
        )
        .ok()?;

        Some(Self {
            provider,
            domain,
            default_email,
        })
    }

    /// 删除指定源地址的全部规则
    pub async fn cleanup(&self, from: &str) {
        if let Ok(rules) = self.provider.list().await {
            for rule in rules.iter().filter(|r| r.from == from) {
                let _ = self.provider.delete(&rule.id).await;
            }
        }
    }
}
