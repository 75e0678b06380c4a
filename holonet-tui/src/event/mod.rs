//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!         · handle_event    将原始事件翻译为 AppMessage
//!
//!
//!     按键分发的优先级（handler.rs）：
//!         1. 弹窗打开时，按键先交给弹窗处理
//!         2. 全局快捷键（Ctrl+C、Alt+h、Alt+r、Alt+t、Tab、Alt+q）
//!         3. 按焦点面板分发：
//!             - 列表焦点：↑↓/jk 移动光标，←→ 翻页，Enter 打开详情，
//!               / 跳到搜索框，q 退出
//!             - 搜索焦点：字符输入，Backspace 删除，
//!               Enter 提交搜索，Esc 放弃输入
//!
//!     注意：q 只在列表焦点下触发退出 ——
//!           搜索框需要把 q 当作普通字符接收。
//!
//!
//! handler.rs 使用 message 层定义的 AppMessage 枚举类型，
//! 创建一个对应的枚举值并返回。
//! 在 src/app.rs 中，有：
//!     update::update(app, backend, msg);
//! 于是消息进入 update 层，执行对应操作。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
