//! 文件日志
//!
//! 库代码通过 `log` 门面输出，这里由 tracing-subscriber 统一接收
//! （`tracing-log` 桥接），写入按天滚动的日志文件。

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名前缀
const LOG_FILE_PREFIX: &str = "character-catalog.log";

/// 获取日志目录
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("character-catalog")
        .join("logs")
}

/// 初始化日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
/// 默认级别 info，可用 `RUST_LOG` 覆盖。
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()?;

    tracing::info!("Logging to {}", dir.display());
    Ok(guard)
}
