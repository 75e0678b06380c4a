//! 应用主状态结构

use holonet_client::ListQuery;

use super::{CharactersState, FocusPanel, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 人物列表页面状态
    pub characters: CharactersState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 以给定的启动查询创建应用实例
    pub fn new(query: ListQuery) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::List,
            status_message: None,
            characters: CharactersState::new(query),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ListQuery::default())
    }
}
