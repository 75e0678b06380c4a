//! 弹窗更新逻辑
//!
//! 处理详情弹窗和帮助弹窗的消息

use crate::backend::Backend;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, backend: &Backend, msg: ModalMessage) {
    match msg {
        ModalMessage::FetchDetails => {
            handle_fetch_details(app, backend);
        }

        ModalMessage::DetailsLoaded { generation, result } => {
            // 弹窗可能已经关闭（detail 已 reset），
            // 代际标记不匹配时结果被静默丢弃
            app.characters.detail.complete(generation, result);
        }

        ModalMessage::Close => {
            app.modal.close();
            app.characters.detail.reset();
        }
    }
}

/// 获取选中人物的关联记录
///
/// 前置条件：详情尚未获取过。聚合一旦存在（哪怕是失败后的全空聚合），
/// 获取入口就被渲染出的小节取代，重新获取只有关闭弹窗再打开一条路。
fn handle_fetch_details(app: &mut App, backend: &Backend) {
    if !app.characters.detail.is_idle() {
        return;
    }

    let Some(Modal::CharacterDetail { ref character }) = app.modal.active else {
        return;
    };
    let character = character.clone();

    let generation = app.characters.detail.begin_load();
    backend.spawn_load_details(character, generation);
}
