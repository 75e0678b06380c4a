//! 人物列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use holonet_core::Phase;

use crate::model::App;
use crate::view::theme::colors;

/// 名字列的宽度（基于显示宽度对齐）
const NAME_COLUMN_WIDTH: usize = 28;

/// 渲染人物列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 底部留一行给分页栏
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let list_area = chunks[0];
    let pager_area = chunks[1];

    let list = &app.characters.list;
    if let Some(error) = list.error() {
        render_error(frame, list_area, error);
    } else if list.characters().is_empty() {
        if list.phase() == Phase::Loaded {
            render_empty(frame, list_area);
        } else {
            render_loading(frame, list_area);
        }
    } else {
        render_list(app, frame, list_area);
    }

    render_pager(app, frame, pager_area);
}

/// 渲染加载状态（首屏或旧结果已被清空时）
fn render_loading(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  Loading characters...", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态（搜索无命中）
fn render_empty(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  No characters found.", Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(
            "  Press / to adjust the search, then Enter to apply.",
            Style::default().fg(c.muted),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染错误状态
fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(
            "  Something went wrong with the characters fetching.",
            Style::default().fg(c.error),
        ),
        Line::from(""),
        Line::styled(format!("  {error}"), Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled("  Press Alt+r to retry.", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染人物列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .characters
        .list
        .characters()
        .iter()
        .enumerate()
        .map(|(i, character)| {
            let is_selected = i == app.characters.selected;

            let name_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let year_style = if is_selected {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let gender_style = if is_selected {
                Style::default().fg(c.selected_fg).bg(c.selected_bg)
            } else {
                Style::default().fg(c.muted)
            };

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(pad_to_width(&character.name, NAME_COLUMN_WIDTH), name_style),
                Span::raw(" "),
                Span::styled(format!("{:>7}", character.birth_year), year_style),
                Span::raw("  "),
                Span::styled(character.gender.clone(), gender_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.characters.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 渲染底部分页栏
fn render_pager(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let list = &app.characters.list;
    let page = app.characters.query.page;

    let prev_style = if list.prev_enabled(page) {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let next_style = if list.next_enabled() {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::raw("  "),
        Span::styled("[←] Previous", prev_style),
        Span::raw("   "),
        Span::styled(
            format!("Page {page}"),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("[→] Next", next_style),
    ];

    if list.is_loading() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Loading...", Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 按显示宽度将文本对齐到固定列宽，超长时截断并加省略号
fn pad_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width.saturating_sub(3) {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }

    format!("{}...{}", truncated, " ".repeat(width.saturating_sub(used + 3)))
}
