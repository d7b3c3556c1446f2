//! 角色列表页面视图

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use character_catalog_core::types::Character;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 名称列宽度
const NAME_WIDTH: usize = 32;

/// 渲染角色列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.characters;
    let c = colors();

    let title = format!(" Characters ({}/{}) ", state.view().len(), app.collection.len());
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(!app.focus.is_search()))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.view().is_empty() {
        render_empty(app, frame, inner);
    } else {
        render_list(app, frame, inner);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let message = if app.characters.is_loading() {
        "Loading characters..."
    } else if app.collection.is_empty() {
        "No characters yet. Alt+r to reload, Alt+a to add one."
    } else {
        "No characters match the current search and filter."
    };

    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染角色列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app.characters.view().iter().map(list_item).collect();

    let list = List::new(items)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.characters.selected));

    frame.render_stateful_widget(list, area, &mut state);

    // 加载中时在列表底部提示
    if app.characters.is_loading() && area.height > 0 {
        let hint = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled("  Loading more...", Style::default().fg(c.warning)))
                .alignment(Alignment::Right),
            hint,
        );
    }
}

/// 单行：状态图标、名称、种族、状态
fn list_item(character: &Character) -> ListItem<'static> {
    let c = colors();
    let status_color = c.status(character.status);

    let line = Line::from(vec![
        Span::styled("● ", Style::default().fg(status_color)),
        Span::styled(pad(&character.name, NAME_WIDTH), Style::default().fg(c.fg)),
        Span::raw("  "),
        Span::styled(pad(&character.species, 16), Style::default().fg(c.muted)),
        Span::styled(character.status.to_string(), Style::default().fg(status_color)),
    ]);

    ListItem::new(line)
}

/// 按显示宽度截断并补齐空格
fn pad(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) && text.width() > width {
            out.push('…');
            used += 1;
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
