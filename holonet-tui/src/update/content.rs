//! 内容面板更新逻辑
//!
//! 处理人物列表的加载、光标移动、翻页与搜索

use holonet_client::{Character, Page};
use holonet_core::CoreResult;

use crate::backend::Backend;
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel};

/// 处理内容面板消息
pub fn update(app: &mut App, backend: &Backend, msg: ContentMessage) {
    match msg {
        // ========== 列表加载 ==========
        ContentMessage::Load => {
            handle_load(app, backend);
        }
        ContentMessage::PageLoaded { generation, result } => {
            handle_page_loaded(app, generation, result);
        }

        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => {
            app.characters.select_previous();
        }
        ContentMessage::SelectNext => {
            app.characters.select_next();
        }
        ContentMessage::SelectFirst => {
            app.characters.select_first();
        }
        ContentMessage::SelectLast => {
            app.characters.select_last();
        }
        ContentMessage::OpenDetail => {
            handle_open_detail(app);
        }

        // ========== 分页 ==========
        ContentMessage::PrevPage => {
            handle_prev_page(app, backend);
        }
        ContentMessage::NextPage => {
            handle_next_page(app, backend);
        }

        // ========== 搜索 ==========
        ContentMessage::SearchInput(ch) => {
            if app.focus.is_search() {
                app.characters.search_input.push(ch);
            }
        }
        ContentMessage::SearchBackspace => {
            if app.focus.is_search() {
                app.characters.search_input.pop();
            }
        }
        ContentMessage::CommitSearch => {
            handle_commit_search(app, backend);
        }
        ContentMessage::CancelSearch => {
            handle_cancel_search(app);
        }
    }
}

// ========== 列表加载处理 ==========

/// 按当前查询发起一次后台加载
pub(super) fn handle_load(app: &mut App, backend: &Backend) {
    let generation = app.characters.list.begin_load();
    backend.spawn_load_characters(app.characters.query.clone(), generation);
}

fn handle_page_loaded(app: &mut App, generation: u64, result: CoreResult<Page<Character>>) {
    // 过期的完成消息被状态机丢弃，此时光标保持不动
    if app.characters.list.complete(generation, result) {
        app.characters.select_first();
        app.clear_status();
    }
}

// ========== 分页处理 ==========

fn handle_prev_page(app: &mut App, backend: &Backend) {
    if !app.characters.list.prev_enabled(app.characters.query.page) {
        return;
    }

    app.characters.query.prev_page();
    handle_load(app, backend);
}

fn handle_next_page(app: &mut App, backend: &Backend) {
    if !app.characters.list.next_enabled() {
        return;
    }

    app.characters.query.next_page();
    handle_load(app, backend);
}

// ========== 详情处理 ==========

/// 打开选中人物的详情弹窗
///
/// 关联记录不在这里获取：弹窗先展示人物属性和显式的获取入口，
/// 聚合请求由 `ModalMessage::FetchDetails` 按需发起。
fn handle_open_detail(app: &mut App) {
    let Some(character) = app.characters.selected_character().cloned() else {
        return;
    };

    app.modal.show_character_detail(character);

    // 丢弃上一个人物的聚合数据，回到获取入口
    app.characters.detail.reset();
}

// ========== 搜索处理 ==========

/// 提交搜索草稿：页码重置为 1，焦点回到列表
fn handle_commit_search(app: &mut App, backend: &Backend) {
    let term = app.characters.search_input.clone();
    app.characters.query.set_search(term);
    app.focus = FocusPanel::List;
    handle_load(app, backend);
}

/// 放弃未提交的输入，恢复已提交的搜索词
fn handle_cancel_search(app: &mut App) {
    app.characters.search_input = app.characters.query.search.clone();
    app.focus = FocusPanel::List;
}
