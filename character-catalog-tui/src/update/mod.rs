//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。
//!     mod content;        // 列表页子消息 + 加载结果合并
//!     mod modal;          // 弹窗子消息
//!
//! 需要异步执行的操作（加载下一页、重新加载、保存配置）
//! 只在 App 上留下请求标志，由主循环交给 Backend 层执行。
//!

mod content;
mod modal;

use crate::message::{AppMessage, ModalMessage};
use crate::model::App;
use crate::view::theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::PageLoaded(completion) => {
            content::apply_completion(app, completion);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                modal::update(app, ModalMessage::Close);
            } else if app.focus.is_search() {
                app.focus = app.focus.toggle();
            } else if !app.characters.query.search.is_empty() {
                app.characters.clear_search();
                app.refresh_view();
                app.check_prefetch();
            } else {
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            app.reload_requested = true;
            app.set_status("Reloading...");
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggle();
            theme::set_theme(app.config.theme);
            app.config_dirty = true;
            app.set_status(format!("Theme: {}", app.config.theme.name()));
        }

        AppMessage::Noop => {}
    }
}
