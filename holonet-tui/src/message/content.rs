//! 内容面板消息
//!
//! 处理人物列表的加载、光标移动、翻页与搜索

use holonet_client::{Character, Page};
use holonet_core::CoreResult;

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表加载 ==========
    /// 按当前查询加载一页人物
    Load,
    /// 后台加载完成（携带发起时的代际标记）
    PageLoaded {
        generation: u64,
        result: CoreResult<Page<Character>>,
    },

    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开选中人物的详情弹窗
    OpenDetail,

    // ========== 分页 ==========
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,

    // ========== 搜索 ==========
    /// 在搜索框中输入一个字符
    SearchInput(char),
    /// 删除搜索框中的最后一个字符
    SearchBackspace,
    /// 提交搜索（页码重置为 1）
    CommitSearch,
    /// 放弃未提交的输入，恢复已提交的搜索词
    CancelSearch,
}
