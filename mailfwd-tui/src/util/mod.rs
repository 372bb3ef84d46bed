//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     terminal.rs     终端的初始化和恢复（raw mode + 备用屏幕）
//!     logging.rs      日志初始化（写入缓存目录下的日志文件）
//!
//! 注意：TUI 占用了整个终端，日志绝不能写到 stdout/stderr，
//!       否则会把画面打乱。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
