//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod content;
//!         mod modal;
//!
//!         pub use app::AppMessage;
//!         pub use content::ContentMessage;
//!         pub use modal::ModalMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             ToggleFocus,                        // 切换焦点面板
//!             Content(ContentMessage),            // 内容面板子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             Refresh,                            // 重新加载当前页
//!             ShowHelp,                           // 显示帮助
//!             ToggleTheme,                        // 切换主题
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     消息有两个来源：
//!         1. Event 层 —— 用户按键翻译而来（Load、SelectNext、CommitSearch …）
//!         2. Backend 层 —— 后台任务完成后经 channel 回传
//!            （PageLoaded、DetailsLoaded，均携带发起时的代际标记，
//!              Update 层据此丢弃过期的完成消息）
//!
//!     两类消息汇合在同一个 update() 入口，
//!     保证 Model 只在一处被修改。
//!

mod app;
mod content;
mod modal;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
