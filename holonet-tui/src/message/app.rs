//! 应用主消息枚举

use super::{ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（列表 ⇄ 搜索框）
    ToggleFocus,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 重新加载当前页
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换主题（Dark ⇄ Light）
    ToggleTheme,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
