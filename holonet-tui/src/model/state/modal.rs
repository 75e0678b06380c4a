//! 弹窗/对话框状态

use holonet_client::Character;

/// 弹窗枚举
///
/// 每种弹窗都是一个变体，携带该弹窗需要的所有数据。
/// 详情弹窗只保存人物摘要；聚合结果在 `CharactersState::detail` 中，
/// 由代际标记保证不会串到别的人物身上。
#[derive(Debug, Clone)]
pub enum Modal {
    /// 人物详情弹窗
    CharacterDetail {
        /// 被查看的人物（列表行的快照）
        character: Character,
    },
    /// 帮助弹窗
    Help,
}

/// 弹窗状态容器
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示人物详情弹窗
    pub fn show_character_detail(&mut self, character: Character) {
        self.active = Some(Modal::CharacterDetail { character });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
