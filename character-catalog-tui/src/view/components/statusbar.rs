//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, FocusPanel, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let separator = || Span::styled(" │ ", Style::default().fg(c.muted));

    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 分页进度
    let cursor = &app.characters.cursor;
    spans.push(separator());
    if cursor.is_in_flight() {
        spans.push(Span::styled(format!("⟳ page {}", cursor.page()), Style::default().fg(c.warning)));
    } else if cursor.has_more() {
        spans.push(Span::raw(format!("next page {}", cursor.page())));
    } else {
        spans.push(Span::raw("end of catalog"));
    }

    if let Some(ref error) = app.characters.error {
        spans.push(separator());
        spans.push(Span::styled(error.clone(), Style::default().fg(c.error)));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::raw(msg.clone()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match &app.modal.active {
        Some(Modal::Detail { .. }) => vec![("e", "Edit"), ("d", "Delete"), ("Esc", "Close")],
        Some(Modal::Form { .. }) => vec![
            ("Tab", "Next Field"),
            ("←→", "Status"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
        Some(Modal::ConfirmDelete { .. }) => vec![("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")],
        Some(Modal::Help | Modal::Error { .. }) => vec![("Esc", "Close")],
        None => match app.focus {
            FocusPanel::Search => vec![("Type", "Search"), ("Enter", "Done"), ("Ctrl+u", "Clear")],
            FocusPanel::List => vec![
                ("↑↓", "Select"),
                ("Enter", "Details"),
                ("/", "Search"),
                ("f", "Filter"),
                ("s", "Sort"),
                ("Alt+a", "Add"),
                ("Alt+h", "Help"),
                ("q", "Quit"),
            ],
        },
    }
}
