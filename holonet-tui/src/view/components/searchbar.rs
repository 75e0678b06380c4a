//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::colors;

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_search();

    let border_style = if is_focused {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = &app.characters.search_input;
    let line = if input.is_empty() && !is_focused {
        // 占位符
        Line::styled(
            "Type / to filter characters by name",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        let mut spans = vec![Span::styled(input.clone(), Style::default().fg(c.fg))];
        if is_focused {
            // 输入光标
            spans.push(Span::styled("▎", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), inner);
}
