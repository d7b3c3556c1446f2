//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::{App, FocusPanel, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端大小改变时下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    match app.focus {
        FocusPanel::Search => handle_search_keys(key),
        FocusPanel::List => handle_list_keys(key),
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter | KeyCode::Down => AppMessage::ToggleFocus,
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => {
            AppMessage::Content(ContentMessage::ClearSearch)
        }
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Content(ContentMessage::SearchInput(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::CYCLE_FILTER.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleStatusFilter);
    }
    if DefaultKeymap::TOGGLE_SORT.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSort);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PageUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::PageDown),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Delete => AppMessage::Content(ContentMessage::Delete),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char('q') if key.modifiers.is_empty() => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Detail { .. } => handle_detail_keys(key),
        Modal::Form { .. } => handle_form_keys(key),
        Modal::ConfirmDelete { .. } => handle_confirm_delete_keys(key),
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理详情弹窗的按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Modal(ModalMessage::Delete);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('q') => AppMessage::Modal(ModalMessage::Close),
        KeyCode::Char('e') => AppMessage::Modal(ModalMessage::Edit),
        KeyCode::Char('d') | KeyCode::Delete => AppMessage::Modal(ModalMessage::Delete),
        _ => AppMessage::Noop,
    }
}

/// 处理新建/编辑表单的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),
        KeyCode::Left => AppMessage::Modal(ModalMessage::Left),
        KeyCode::Right => AppMessage::Modal(ModalMessage::Right),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Modal(ModalMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Modal(ModalMessage::Left),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Modal(ModalMessage::Right),
        KeyCode::Tab => AppMessage::Modal(ModalMessage::NextField),
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_search_focus_captures_characters() {
        let mut app = App::default();
        app.focus = FocusPanel::Search;

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::SearchInput('q'))));
    }

    #[test]
    fn test_list_keys() {
        let app = App::default();

        let msg = handle_event(press(KeyCode::Char('f'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::CycleStatusFilter)));

        let msg = handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::Delete)));

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }

    #[test]
    fn test_modal_takes_priority() {
        let mut app = App::default();
        app.modal.show_detail(1);

        let msg = handle_event(press(KeyCode::Char('e'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Edit)));

        let msg = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Modal(ModalMessage::Close)));
    }
}
