//! 主布局渲染

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 标题栏 + 搜索栏 + 列表 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    render_query_bar(app, frame, main_layout[1]);
    pages::characters::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Character Catalog v", env!("CARGO_PKG_VERSION")))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染搜索栏：搜索词 + 状态过滤 + 排序方向
fn render_query_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let query = &app.characters.query;
    let focused = app.focus.is_search();

    let search = if query.search.is_empty() && !focused {
        Span::styled("press / to search", Style::default().fg(c.muted))
    } else {
        Span::styled(query.search.clone(), Style::default().fg(c.fg))
    };
    let cursor = if focused { "▏" } else { "" };

    let line = Line::from(vec![
        Span::styled(" › ", Style::default().fg(c.muted)),
        search,
        Span::styled(cursor, Style::default().fg(c.highlight)),
    ]);

    let block = Block::default()
        .title(" Search ")
        .title_style(Styles::title())
        .title_bottom(
            Line::from(vec![
                Span::styled(" Status: ", Style::default().fg(c.muted)),
                Span::styled(query.status.label(), Style::default().fg(c.fg)),
                Span::styled("  Sort: ", Style::default().fg(c.muted)),
                Span::styled(query.sort.as_str(), Style::default().fg(c.fg)),
                Span::raw(" "),
            ])
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
