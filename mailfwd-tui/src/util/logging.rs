//! 日志初始化
//!
//! 库代码通过 `log` 门面输出，这里安装 tracing 订阅者并桥接 `log` 记录，
//! 写入 `<cache dir>/mailfwd/mailfwd.log`。

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR_NAME: &str = "mailfwd";
const LOG_FILE_NAME: &str = "mailfwd.log";
const DEFAULT_FILTER: &str = "info";

/// 日志目录：系统缓存目录，缺失时回退到临时目录
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
}

/// 日志过滤：`RUST_LOG`（可来自 `.env`），缺省 `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(env_filter())
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!("Logging to {}", dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn filter_reads_rust_log_loaded_from_dotenv() {
        dotenvy::from_read_override("RUST_LOG=debug\n".as_bytes()).unwrap();
        assert_eq!(env_filter().max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
