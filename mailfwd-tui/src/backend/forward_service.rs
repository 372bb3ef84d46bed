//! 转发规则服务

use std::sync::Arc;

use mailfwd_provider::{ForwardingProvider, ForwardingRule, Result as ProviderResult};
use tokio::runtime::{Builder, Runtime};

/// TUI 转发服务
///
/// 每次调用都在当前线程上阻塞到远端返回，
/// 从控制器的角度看所有远端操作都是同步的。
pub struct ForwardService {
    provider: Arc<dyn ForwardingProvider>,
    runtime: Runtime,
}

impl ForwardService {
    pub fn new(provider: Arc<dyn ForwardingProvider>) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { provider, runtime })
    }

    pub fn domain(&self) -> &str {
        self.provider.domain()
    }

    pub fn default_email(&self) -> &str {
        self.provider.default_email()
    }

    pub fn create(&self, local_part: &str, destination: &str) -> ProviderResult<()> {
        self.runtime
            .block_on(self.provider.create(local_part, destination))
    }

    pub fn create_on_default_email(&self) -> ProviderResult<()> {
        self.runtime.block_on(self.provider.create_on_default_email())
    }

    pub fn list(&self) -> ProviderResult<Vec<ForwardingRule>> {
        self.runtime.block_on(self.provider.list())
    }

    pub fn delete(&self, id: &str) -> ProviderResult<()> {
        self.runtime.block_on(self.provider.delete(id))
    }
}
