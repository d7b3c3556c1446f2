//! Character Catalog TUI
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 数据服务与配置 (`backend/`)
//!
//! 启动顺序：
//!     init_logging()          // 日志写文件，stdout 留给 TUI
//!     ConfigService::load()   // 读取配置
//!     CatalogService          // 在 tokio 运行时上加载分页数据
//!     init_terminal()
//!     app::run()
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::time::Duration;

use anyhow::{Context, Result};

use backend::{CatalogService, ConfigService, JsonConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 存活到 main 结束）
    let _log_guard = init_logging()?;

    // 2. 配置
    let config_service = JsonConfigService::new();
    let config = config_service
        .load()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    view::theme::set_theme(config.theme);

    // 3. 异步运行时与数据服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let mut catalog = CatalogService::from_config(&config, runtime.handle().clone())?;

    // 4. 终端与应用实例
    let mut terminal = init_terminal()?;
    let mut app = model::App::new(config);

    // 5. 主循环
    let result = app::run(&mut terminal, &mut app, &mut catalog, &config_service);

    // 6. 恢复终端，丢弃之后到达的加载结果
    restore_terminal(&mut terminal)?;
    catalog.shutdown();
    runtime.shutdown_timeout(Duration::from_secs(1));

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
