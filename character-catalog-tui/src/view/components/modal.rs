//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use character_catalog_core::types::CharacterStatus;

use crate::model::{App, CharacterForm, FormMode, Modal};
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Detail { id } => render_detail(app, frame, *id),
        Modal::Form { mode, form } => render_form(frame, *mode, form),
        Modal::ConfirmDelete { name, focus, .. } => render_confirm_delete(frame, name, *focus),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框
fn modal_block(title: &str) -> Block<'static> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg).fg(c.fg))
}

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{text:<9}"), Style::default().fg(colors().muted))
}

/// 渲染角色详情
fn render_detail(app: &App, frame: &mut Frame, id: u32) {
    let c = colors();
    let area = centered_rect(60, 11, frame.area());
    frame.render_widget(Clear, area);

    let lines = match app.collection.get(id) {
        Some(character) => vec![
            Line::from(vec![label("ID"), Span::raw(character.id.to_string())]),
            Line::from(vec![
                label("Name"),
                Span::styled(character.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(vec![
                label("Status"),
                Span::styled(character.status.to_string(), Style::default().fg(c.status(character.status))),
            ]),
            Line::from(vec![label("Species"), Span::raw(character.species.clone())]),
            Line::from(vec![label("Image"), Span::raw(character.image.clone())]),
            Line::from(""),
            Line::styled("e: Edit   d: Delete   Esc: Close", Style::default().fg(c.muted)),
        ],
        None => vec![Line::styled("This character no longer exists.", Style::default().fg(c.error))],
    };

    let paragraph = Paragraph::new(lines)
        .block(modal_block("Character"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染新建/编辑表单
fn render_form(frame: &mut Frame, mode: FormMode, form: &CharacterForm) {
    let c = colors();
    let area = centered_rect(60, 14, frame.area());
    frame.render_widget(Clear, area);

    let title = match mode {
        FormMode::Create => "New Character".to_string(),
        FormMode::Edit(id) => format!("Edit Character #{id}"),
    };

    let field = |index: usize, name: &str, value: String| {
        let focused = form.focus == index;
        let style = if focused {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.fg)
        };
        let marker = if focused { "▏" } else { "" };
        Line::from(vec![label(name), Span::styled(value, style), Span::styled(marker, style)])
    };

    let status_value = if form.focus == CharacterForm::STATUS_FIELD {
        format!("◀ {} ▶", form.status)
    } else {
        form.status.to_string()
    };

    let mut lines = vec![
        field(0, "Name", form.name.clone()),
        Line::from(""),
        field(CharacterForm::STATUS_FIELD, "Status", status_value),
        Line::from(""),
        field(2, "Species", form.species.clone()),
        Line::from(""),
        field(3, "Image", form.image.clone()),
        Line::from(""),
    ];

    if let Some(ref error) = form.error {
        lines.push(Line::styled(error.clone(), Style::default().fg(c.error)));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(
        "Tab: Next Field   Enter: Save   Esc: Cancel",
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines).block(modal_block(&title)), area);
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, name: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(44, 8, frame.area());
    frame.render_widget(Clear, area);

    let button = |text: &'static str, active: bool, color| {
        if active {
            Span::styled(
                format!("[ {text} ]"),
                Style::default().fg(c.selected_fg).bg(color).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("  {text}  "), Style::default().fg(c.fg))
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(format!("Delete \"{name}\"?")).alignment(Alignment::Center),
        Line::styled("Only the local list is changed.", Style::default().fg(c.muted))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            button("Cancel", focus == 0, c.highlight),
            Span::raw("    "),
            button("Delete", focus == 1, c.error),
        ])
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).block(modal_block("Confirm Delete")), area);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.error)),
        Line::from(""),
        Line::styled("Enter / Esc: Close", Style::default().fg(c.muted)),
    ];
    let paragraph = Paragraph::new(lines)
        .block(modal_block(title))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(56, 20, frame.area());
    frame.render_widget(Clear, area);

    let key_style = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![Span::styled(format!("  {key:<12}"), key_style), Span::raw(desc)])
    };

    let statuses: Vec<&str> = CharacterStatus::ALL.iter().map(|s| s.as_str()).collect();
    let filter_desc = format!("All → {}", statuses.join(" → "));

    let lines = vec![
        Line::styled("List", Style::default().add_modifier(Modifier::BOLD)),
        row("↑↓ / j k", "Move selection"),
        row("PgUp PgDn", "Move by page"),
        row("Enter", "Show details"),
        row("/ or Tab", "Search by name"),
        Line::from(vec![Span::styled(format!("  {:<12}", "f"), key_style), Span::raw(filter_desc)]),
        row("s", "Toggle sort direction"),
        row("Alt+a", "Add character"),
        row("Alt+e", "Edit selected"),
        row("Alt+d", "Delete selected"),
        Line::from(""),
        Line::styled("Global", Style::default().add_modifier(Modifier::BOLD)),
        row("Alt+r", "Reload from page 1"),
        row("Alt+t", "Toggle theme"),
        row("Esc", "Back / clear search"),
        row("q / Alt+q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(lines).block(modal_block("Help")), area);
}
