//! 人物列表页面状态

use holonet_client::{Character, ListQuery};
use holonet_core::{DetailState, ListState};

/// 人物列表页面状态
///
/// `query` 是已提交的查询（决定列表内容），`search_input` 是搜索框里
/// 尚未提交的草稿。两者只在 Enter 提交时合流。
#[derive(Debug, Default)]
pub struct CharactersState {
    /// 已提交的查询（页码 + 搜索词）
    pub query: ListQuery,
    /// 列表加载状态机
    pub list: ListState,
    /// 详情聚合状态机
    pub detail: DetailState,
    /// 当前选中的索引
    pub selected: usize,
    /// 搜索框中的草稿文本
    pub search_input: String,
}

impl CharactersState {
    /// 以给定查询创建初始状态（搜索框预填已提交的搜索词）
    pub fn new(query: ListQuery) -> Self {
        Self {
            search_input: query.search.clone(),
            query,
            ..Self::default()
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.list.characters().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        let len = self.list.characters().len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// 获取当前选中的人物
    pub fn selected_character(&self) -> Option<&Character> {
        self.list.characters().get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_prefills_search_input_from_query() {
        let mut query = ListQuery::default();
        query.set_search("sky");
        query.page = 2;

        let state = CharactersState::new(query);
        assert_eq!(state.search_input, "sky");
        assert_eq!(state.query.page, 2);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_stays_within_bounds_on_empty_list() {
        let mut state = CharactersState::new(ListQuery::default());

        state.select_next();
        assert_eq!(state.selected, 0);
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_last();
        assert_eq!(state.selected, 0);
        assert!(state.selected_character().is_none());
    }
}
