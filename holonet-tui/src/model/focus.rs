//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 人物列表
    #[default]
    List,
    /// 搜索框
    Search,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(&self) -> Self {
        match self {
            FocusPanel::List => FocusPanel::Search,
            FocusPanel::Search => FocusPanel::List,
        }
    }

    /// 是否是人物列表
    pub fn is_list(&self) -> bool {
        matches!(self, FocusPanel::List)
    }

    /// 是否是搜索框
    pub fn is_search(&self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
