//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, backend: &Backend, msg: AppMessage) {...}
//!
//!
//!     主更新函数使用 match 进行穷举，
//!     其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理（content、modal）。
//!     通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 异步操作的两段式更新
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     所有网络加载都拆成两条消息：
//!
//!         发起段（用户按键触发）：
//!             Load / NextPage / CommitSearch / OpenDetail
//!             → 状态机 begin_load() 领取代际标记
//!             → backend.spawn_xxx(…, generation) 抛到运行时
//!
//!         完成段（channel 回传触发）：
//!             PageLoaded / DetailsLoaded { generation, result }
//!             → 状态机 complete(generation, result)
//!             → 标记过期的响应被丢弃，界面不会被旧数据覆盖
//!
//!     Update 层自身从不 await ——
//!     它发起异步操作后立即返回，主循环继续渲染 Loading 状态。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::App;




/// 处理应用消息，更新状态
pub fn update(app: &mut App, backend: &Backend, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, backend, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, backend, modal_msg);
        }

        AppMessage::Refresh => {
            if !app.modal.is_open() {
                app.set_status("Refreshing...");
                content::handle_load(app, backend);
            }
        }

        AppMessage::ShowHelp => {
            // 显示帮助弹窗
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            crate::view::theme::toggle_theme();
            app.set_status("Theme switched");
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
