//! 人物详情聚合状态机

use holonet_client::{Film, Species, Starship, Vehicle};

use super::Phase;
use crate::error::CoreResult;

/// 一个人物的全部关联记录，各类别保持引用顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterDetails {
    pub films: Vec<Film>,
    pub vehicles: Vec<Vehicle>,
    pub species: Vec<Species>,
    pub starships: Vec<Starship>,
}

/// 人物详情聚合状态机
///
/// 与列表状态机同样的代际约定。[`reset`](Self::reset) 在切换选中人物或
/// 关闭详情时调用，回到 `Idle` 并推进代际计数，上一个人物在途的响应
/// 回来时标记已经过期，不可能落到新人物身上。
#[derive(Debug, Default)]
pub struct DetailState {
    phase: Phase,
    details: Option<CharacterDetails>,
    error: Option<String>,
    generation: u64,
}

impl DetailState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前加载阶段
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 已解析的关联记录（失败后为全空聚合）
    #[must_use]
    pub fn details(&self) -> Option<&CharacterDetails> {
        self.details.as_ref()
    }

    /// 最近一次失败的用户可读描述
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// 是否还没有发起过加载（详情页显示获取入口的条件）
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// 回到初始状态
    ///
    /// 代际计数同时前进一格：还没回来的响应即刻过期，
    /// 不需要等新的加载发起。
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.details = None;
        self.error = None;
    }

    /// 开始一次新的聚合加载，返回本次的代际标记
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// 应用一次聚合结果
    ///
    /// `generation` 不是最新标记时整体丢弃，返回 `false` 且状态不变。
    /// 任何一个关联请求失败都会使整次聚合失败，此时展示全空聚合加
    /// 错误描述，不展示部分结果。
    pub fn complete(&mut self, generation: u64, result: CoreResult<CharacterDetails>) -> bool {
        if generation != self.generation {
            log::debug!(
                "discarding stale detail response (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        match result {
            Ok(details) => {
                self.details = Some(details);
                self.error = None;
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                self.details = Some(CharacterDetails::default());
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }
}
