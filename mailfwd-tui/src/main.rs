//! mailfwd：管理邮件转发规则的终端工具
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! 启动顺序：
//!
//!     dotenvy::dotenv()       // 读入 .env（含 RUST_LOG）
//!     init_logging()          // 日志写入缓存目录，不碰终端
//!     ConfigService::load()   // FNF_* 环境变量
//!     create_provider()       // OVH Provider
//!     ForwardService::new()   // 单线程 tokio 运行时
//!     terminal::size()        // 错误页折行需要初始宽度
//!     App::new()              // 首次拉取规则列表，失败即退出
//!     init_terminal()         // raw mode + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! 进入主循环之前的任何失败都打印 `Error: …` 并以 1 退出。

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;

use anyhow::{Context, Result};
use mailfwd_provider::create_provider;

use backend::{ConfigService, EnvConfigService, ForwardService, SystemClipboard};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 1. .env 先于日志加载，其中的 RUST_LOG 才能生效
    let dotenv_result = dotenvy::dotenv();

    // 2. 日志（失败不影响使用）
    let _log_guard = match init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };
    if let Err(e) = dotenv_result {
        if !e.not_found() {
            log::warn!("Failed to read .env: {e}");
        }
    }

    // 3. 配置
    let config = EnvConfigService::new().load()?;

    // 4. Provider 与后端服务
    let provider = create_provider(config.credentials(), config.settings())?;
    let backend = ForwardService::new(provider).context("failed to start async runtime")?;

    // 5. 创建应用实例
    let (width, height) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut app = model::App::new(
        backend,
        Box::new(SystemClipboard),
        config.theme,
        width,
        height,
    )?;

    // 6. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Session ended");
    result
}
