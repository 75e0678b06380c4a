//! 浏览状态机
//!
//! 人物列表与详情聚合各自的加载状态机。所有变更都通过显式的转换方法
//! 完成，渲染层只读取快照，不直接改字段。每次加载会领取一个递增的
//! 代际标记，迟到的响应带着旧标记回来时会被整体丢弃。

mod detail;
mod list;

pub use detail::{CharacterDetails, DetailState};
pub use list::ListState;

/// 异步加载的生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// 尚未发起任何请求
    #[default]
    Idle,
    /// 请求进行中
    Loading,
    /// 最近一次请求成功
    Loaded,
    /// 最近一次请求失败
    Failed,
}
