//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use holonet_core::Phase;

use crate::model::{App, FocusPanel, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和弹窗生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 已提交的查询状态（与原 Web 版地址栏中的深链接一致）
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("?{}", app.characters.query.to_query_string()),
        Styles::hint_desc(),
    ));

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    // 弹窗打开时只提示弹窗按键
    if let Some(ref modal) = app.modal.active {
        match modal {
            Modal::CharacterDetail { .. } => {
                if app.characters.detail.phase() == Phase::Idle {
                    hints.push(("Enter", "Fetch details"));
                }
                hints.push(("Esc", "Close"));
            }
            Modal::Help => {
                hints.push(("Esc/Enter", "Close"));
            }
        }
        return hints;
    }

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::List => {
            hints.push(("↑↓", "Select"));
            hints.push(("←→", "Page"));
            hints.push(("Enter", "Details"));
            hints.push(("/", "Search"));
            hints.push(("q", "Quit"));
        }
        FocusPanel::Search => {
            hints.push(("Enter", "Apply"));
            hints.push(("Esc", "Cancel"));
            hints.push(("Tab", "Switch Panels"));
            hints.push(("Alt+q", "Quit"));
        }
    }

    hints.push(("Alt+h", "Help"));

    hints
}
