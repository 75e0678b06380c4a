//! 人物列表状态机

use holonet_client::{Character, Page};

use super::Phase;
use crate::error::CoreResult;

/// 人物列表状态机
///
/// 持有当前页的记录与加载阶段。[`begin_load`](Self::begin_load) 领取一个
/// 代际标记，完成时把标记交还给 [`complete`](Self::complete)；只有携带
/// 最新标记的结果才会被应用，慢的旧响应不可能覆盖新响应。
#[derive(Debug, Default)]
pub struct ListState {
    phase: Phase,
    characters: Vec<Character>,
    has_next: bool,
    error: Option<String>,
    generation: u64,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前加载阶段
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 当前页的人物记录（保持 API 返回顺序）
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// 最近一次成功响应是否报告还有下一页
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.has_next
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

    /// 上一页控件是否可用（第一页或加载中时禁用）
    #[must_use]
    pub fn prev_enabled(&self, page: u32) -> bool {
        page > 1 && !self.is_loading()
    }

    /// 下一页控件是否可用（没有下一页或加载中时禁用）
    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.has_next && !self.is_loading()
    }

    /// 开始一次新的加载，返回本次加载的代际标记
    ///
    /// 进入 `Loading` 后旧记录仍然保留，渲染层可以继续显示上一页内容。
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// 应用一次加载结果
    ///
    /// `generation` 不是最新标记时整体丢弃，返回 `false` 且状态不变。
    /// 失败时清空记录并记下错误描述，旧内容不会和错误信息同屏。
    pub fn complete(&mut self, generation: u64, result: CoreResult<Page<Character>>) -> bool {
        if generation != self.generation {
            log::debug!(
                "discarding stale list response (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.has_next = page.has_next();
                self.characters = page.results;
                self.error = None;
                self.phase = Phase::Loaded;
            }
            Err(e) => {
                self.characters.clear();
                self.has_next = false;
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }
}
