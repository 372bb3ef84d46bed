//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//!     forward_service.rs   持有 Provider 与单线程 tokio 运行时，
//!                          把异步的远端调用变成同步调用
//!     config_service.rs    从环境变量（及 .env）加载配置
//!     clipboard.rs         系统剪贴板
//!

mod clipboard;
mod config_service;
mod forward_service;

pub use clipboard::{Clipboard, SystemClipboard};
pub use config_service::{ConfigService, EnvConfigService};
pub use forward_service::ForwardService;
