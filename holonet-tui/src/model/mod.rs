//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层持有应用的全部可变状态，是 View 层渲染的唯一数据来源。
//! 只有 Update 层可以修改它。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // App 主状态结构
//!         mod focus;          // 焦点面板枚举
//!         pub mod state;      // 各页面状态
//!
//!         pub use app::App;
//!         pub use focus::FocusPanel;
//!         pub use state::{CharactersState, Modal, ModalState};
//!
//!
//!     App 的结构：
//!
//!         App {
//!             should_quit: bool,                  // 决定应用是否应该退出
//!             focus: FocusPanel::List,            // 当前焦点在哪个面板
//!             status_message: None,               // 状态栏消息
//!             characters: CharactersState {       // 人物列表页面状态
//!                 query,                              // 已提交的查询（页码 + 搜索词）
//!                 list,                               // 列表加载状态机（holonet-core）
//!                 detail,                             // 详情聚合状态机（holonet-core）
//!                 selected,                           // 当前选中第几项
//!                 search_input,                       // 搜索框草稿
//!             },
//!             modal: ModalState { active: None }, // 弹窗状态
//!         }
//!
//!
//!     加载状态机（list / detail）不在本层定义 ——
//!     它们来自 holonet-core，带代际标记，
//!     本层只是持有它们并把修改权交给 Update 层。
//!
//!     弹窗（state/modal.rs）：
//!         Modal 枚举：每种弹窗都是一个变体，携带该弹窗的所有数据
//!             - CharacterDetail { character }
//!             - Help
//!
//!         ModalState 容器：管理当前活动的弹窗
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() 方法：初始化并显示特定弹窗
//!             - close() 方法：关闭弹窗
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{CharactersState, Modal, ModalState};
