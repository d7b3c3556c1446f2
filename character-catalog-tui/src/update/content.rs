//! 列表页更新逻辑

use character_catalog_core::LoadOutcome;

use crate::backend::PageCompletion;
use crate::message::ContentMessage;
use crate::model::App;

/// PageUp / PageDown 一次移动的行数
const PAGE_ROWS: usize = 10;

/// 处理列表页消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.characters.select_previous(),
        ContentMessage::PageUp => app.characters.page_up(PAGE_ROWS),
        ContentMessage::SelectFirst => app.characters.select_first(),

        // 向下移动时检查是否需要预取
        ContentMessage::SelectNext => {
            app.characters.select_next();
            app.check_prefetch();
        }
        ContentMessage::PageDown => {
            app.characters.page_down(PAGE_ROWS);
            app.check_prefetch();
        }
        ContentMessage::SelectLast => {
            app.characters.select_last();
            app.check_prefetch();
        }

        ContentMessage::Confirm => open_detail(app),
        ContentMessage::Add => {
            if app.characters.selection.request_create() {
                app.modal.show_create();
            }
        }
        ContentMessage::Edit => open_edit(app),
        ContentMessage::Delete => {
            // 没有选中项时不做任何事
            if let Some(character) = app.characters.selected_character().cloned() {
                app.modal.show_confirm_delete(&character, false);
            }
        }

        ContentMessage::CycleStatusFilter => {
            app.characters.cycle_status_filter();
            app.refresh_view();
            app.check_prefetch();
        }
        ContentMessage::ToggleSort => {
            app.characters.toggle_sort();
            app.refresh_view();
            app.check_prefetch();
        }
        ContentMessage::SearchInput(ch) => {
            app.characters.push_search(ch);
            app.refresh_view();
            app.check_prefetch();
        }
        ContentMessage::SearchBackspace => {
            app.characters.pop_search();
            app.refresh_view();
            app.check_prefetch();
        }
        ContentMessage::ClearSearch => {
            app.characters.clear_search();
            app.refresh_view();
            app.check_prefetch();
        }
    }
}

/// 打开高亮角色的详情
fn open_detail(app: &mut App) {
    let Some(character) = app.characters.selected_character().cloned() else {
        return;
    };
    if app.characters.selection.select(&character) {
        app.modal.show_detail(character.id);
    }
}

/// 直接从列表进入编辑（经过详情状态）
fn open_edit(app: &mut App) {
    let Some(character) = app.characters.selected_character().cloned() else {
        return;
    };
    let selection = &mut app.characters.selection;
    if selection.select(&character) && selection.request_edit() {
        app.modal.show_edit(&character);
    }
}

/// 合并后台加载结果
pub fn apply_completion(app: &mut App, completion: PageCompletion) {
    let PageCompletion { liveness, outcome } = completion;
    if !liveness.is_alive() {
        log::debug!("Dropping completion from a previous list");
        return;
    }

    match &outcome {
        LoadOutcome::Loaded { page, characters } => {
            log::debug!("Page {page} loaded with {} characters", characters.len());
            app.characters.error = None;
        }
        LoadOutcome::Exhausted { page } => {
            log::info!("Catalog exhausted at page {page}");
            app.characters.error = None;
            app.set_status(format!("All {} characters loaded", app.collection.len()));
        }
        LoadOutcome::Failed { page, error } => {
            app.characters.error = Some(error.to_string());
            app.set_status(format!("Failed to load page {page}"));
        }
        LoadOutcome::Skipped => {}
    }

    // 只在合并成功后续拉，失败时等下一次用户操作再重试
    if outcome.publish_into(&mut app.collection, &liveness) {
        app.refresh_view();
        app.check_prefetch();
    }
}
