//! 弹窗消息
//!
//! 处理详情弹窗和帮助弹窗的交互

use holonet_core::{CharacterDetails, CoreResult};

/// 弹窗消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 获取选中人物的关联记录（详情弹窗里的显式入口）
    FetchDetails,

    /// 后台详情聚合完成（携带发起时的代际标记）
    DetailsLoaded {
        generation: u64,
        result: CoreResult<CharacterDetails>,
    },

    /// 关闭弹窗
    Close,
}
