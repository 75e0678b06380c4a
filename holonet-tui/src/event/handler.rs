//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;




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
        Event::Key(key_event) => handle_key_event(key_event, app),      // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                                  // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}




/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (app.focus.is_list() && key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理人物列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    // q: 退出（仅在列表焦点下，搜索框需要输入字符）
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // /: 跳转到搜索框
    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // ← →: 翻页
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PrevPage);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        // Enter: 打开详情弹窗
        KeyCode::Enter => {
            AppMessage::Content(ContentMessage::OpenDetail)
        }
        // Home: 跳到第一项
        KeyCode::Home => {
            AppMessage::Content(ContentMessage::SelectFirst)
        }
        // End: 跳到最后一项
        KeyCode::End => {
            AppMessage::Content(ContentMessage::SelectLast)
        }
        // PageUp / PageDown: 翻页
        KeyCode::PageUp => {
            AppMessage::Content(ContentMessage::PrevPage)
        }
        KeyCode::PageDown => {
            AppMessage::Content(ContentMessage::NextPage)
        }
        // Esc: 清除状态栏消息
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// 处理搜索框的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Enter: 提交搜索（重置到第 1 页）
        KeyCode::Enter => AppMessage::Content(ContentMessage::CommitSearch),

        // Esc: 放弃未提交的输入，焦点回到列表
        KeyCode::Esc => AppMessage::Content(ContentMessage::CancelSearch),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),

        // 字符输入（SHIFT 用于大写字母，不能丢弃）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    use crate::model::state::Modal;

    // Esc 和 Ctrl+C 始终可以关闭弹窗
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::CharacterDetail { .. } => match key.code {
            // Enter: 详情还没获取时触发获取入口，否则关闭弹窗
            KeyCode::Enter => {
                if app.characters.detail.is_idle() {
                    AppMessage::Modal(ModalMessage::FetchDetails)
                } else {
                    AppMessage::Modal(ModalMessage::Close)
                }
            }
            // d: 获取关联记录（聚合已存在时由 Update 层忽略）
            KeyCode::Char('d') => AppMessage::Modal(ModalMessage::FetchDetails),
            _ => AppMessage::Noop,
        },
        Modal::Help => {
            // 帮助弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}
