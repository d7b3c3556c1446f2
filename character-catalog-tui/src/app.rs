//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!     terminal.draw(|f| view::render(&app, f))      // 渲染 UI
//!     if app.should_quit { break }
//!     if let Some(event) = poll_event() {           // 轮询输入，最多等待 100ms
//!         update::update(&mut app, handle_event(event, &app))
//!     }
//!     while let Some(done) = catalog.try_recv() {   // 合并后台加载结果
//!         update::update(&mut app, AppMessage::PageLoaded(done))
//!     }
//!     run_effects(...)                              // 执行 Update 留下的请求
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::{CatalogService, ConfigService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    catalog: &mut CatalogService,
    config_service: &dyn ConfigService,
) -> Result<()> {
    catalog.start();

    loop {
        app.characters.cursor = catalog.cursor();

        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        while let Some(completion) = catalog.try_recv() {
            update::update(app, AppMessage::PageLoaded(completion));
        }

        run_effects(app, catalog, config_service);
    }

    Ok(())
}

/// 执行 Update 层留下的请求
fn run_effects(app: &mut App, catalog: &mut CatalogService, config_service: &dyn ConfigService) {
    if app.take_reload_request() {
        app.reset_list();
        catalog.reload();
    }

    if app.take_load_request() {
        catalog.load_more();
    }

    if app.take_config_dirty() {
        if let Err(e) = config_service.save(&app.config) {
            log::warn!("Failed to save config: {e:#}");
            app.set_status("Failed to save settings");
        }
    }
}
