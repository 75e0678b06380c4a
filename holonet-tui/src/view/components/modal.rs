//! 弹窗组件

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use holonet_client::Character;
use holonet_core::{CharacterDetails, Phase};

use crate::model::state::Modal;
use crate::model::App;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CharacterDetail { character } => render_character_detail(app, frame, character),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框内的文本区域（左右各留 2 列、上下各留 1 行）
///
/// 终端比留白还小时收缩为空矩形，而不是让 `u16` 下溢。
fn padded_inner(area: Rect) -> Rect {
    area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    })
}

/// 渲染人物详情弹窗
///
/// 属性行始终展示；属性行之下跟随聚合状态机：
/// Idle 显示获取入口，Loading 显示等待提示，
/// Failed 显示错误描述，Loaded 显示四类关联记录小节。
/// 失败后没有原地重试 —— 关闭弹窗重新打开才回到获取入口。
fn render_character_detail(app: &App, frame: &mut Frame, character: &Character) {
    let detail = &app.characters.detail;
    let mut lines = Vec::new();

    // === 基础属性 ===
    lines.push(attribute_row("Birth year", &character.birth_year));
    lines.push(attribute_row("Gender", &character.gender));
    lines.push(attribute_row("Height", &character.height));
    lines.push(attribute_row("Mass", &character.mass));
    lines.push(attribute_row("Hair color", &character.hair_color));
    lines.push(attribute_row("Skin color", &character.skin_color));
    lines.push(attribute_row("Eye color", &character.eye_color));
    lines.push(Line::from(""));

    let mut border = Color::Cyan;
    match detail.phase() {
        Phase::Idle => {
            lines.push(Line::styled(
                "Press Enter or d to fetch films, vehicles,",
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::styled(
                "species and starships.",
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::from(""));
        }
        Phase::Loading => {
            lines.push(Line::styled(
                "Loading details...",
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::from(""));
        }
        Phase::Failed => {
            border = Color::Red;
            lines.push(Line::styled(
                "Something went wrong with the details fetching.",
                Style::default().fg(Color::Red),
            ));
            lines.push(Line::from(""));
            lines.push(Line::styled(
                detail.error().unwrap_or("Unknown error").to_string(),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::from(""));
            push_sections(&mut lines, &CharacterDetails::default());
        }
        Phase::Loaded => {
            if let Some(details) = detail.details() {
                push_sections(&mut lines, details);
            }
        }
    }

    lines.push(Line::styled(
        "Press Esc to close",
        Style::default().fg(Color::DarkGray),
    ));

    let height = (lines.len() as u16 + 2).min(frame.area().height);
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block(&character.name, border);
    frame.render_widget(block, area);

    let inner = padded_inner(area);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 四个关联记录小节，顺序固定
fn push_sections(lines: &mut Vec<Line<'static>>, details: &CharacterDetails) {
    push_section(
        lines,
        "Films",
        details.films.iter().map(|f| f.title.clone()),
        "No films",
    );
    push_section(
        lines,
        "Vehicles",
        details.vehicles.iter().map(|v| v.name.clone()),
        "No vehicles",
    );
    push_section(
        lines,
        "Species",
        details.species.iter().map(|s| s.name.clone()),
        "No species",
    );
    push_section(
        lines,
        "Starships",
        details.starships.iter().map(|s| s.name.clone()),
        "No starships",
    );
}

/// 弹窗外框（标题居中，黑色底）
fn modal_block(title: &str, border: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black))
}

/// 一行 "标签: 值" 属性
fn attribute_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}

/// 一个关联记录小节：标题 + 条目列表（为空时显示占位文本）
fn push_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    items: impl Iterator<Item = String>,
    empty_text: &'static str,
) {
    lines.push(Line::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let mut any = false;
    for item in items {
        any = true;
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::styled(item, Style::default().fg(Color::White)),
        ]));
    }
    if !any {
        lines.push(Line::styled(
            format!("  {empty_text}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    lines.push(Line::from(""));
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let mut lines = Vec::new();

    push_help_section(
        &mut lines,
        "Global",
        &[
            ("Tab", "Switch focus between list and search"),
            ("Alt+r", "Reload the current page"),
            ("Alt+t", "Toggle dark / light theme"),
            ("Alt+h / ?", "Show this help"),
            ("Alt+q / Ctrl+C", "Quit"),
        ],
    );
    push_help_section(
        &mut lines,
        "Character list",
        &[
            ("↑↓ / j k", "Move the cursor"),
            ("←→ / PgUp PgDn", "Previous / next page"),
            ("Home / End", "First / last row"),
            ("Enter", "Open character details"),
            ("/", "Jump to the search box"),
            ("q", "Quit"),
        ],
    );
    push_help_section(
        &mut lines,
        "Search",
        &[
            ("Enter", "Apply the search (back to page 1)"),
            ("Esc", "Discard the draft"),
        ],
    );
    push_help_section(
        &mut lines,
        "Detail modal",
        &[
            ("d / Enter", "Fetch the related records"),
            ("Esc", "Close (discards the aggregate)"),
        ],
    );

    lines.push(Line::styled(
        "Press Esc or Enter to close",
        Style::default().fg(Color::DarkGray),
    ));

    let height = (lines.len() as u16 + 2).min(frame.area().height);
    let area = centered_rect(58, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    let inner = padded_inner(area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 一个帮助小节：标题 + 按键说明行
fn push_help_section(
    lines: &mut Vec<Line<'static>>,
    title: &str,
    entries: &[(&'static str, &'static str)],
) {
    lines.push(Line::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{key:<16}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
}
