//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层是纯函数：读取 Model，画出一帧界面，不修改任何状态。
//! 每次主循环都会整帧重画，所以这里没有"增量更新"的概念 ——
//! 状态变了，下一帧自然就不一样了。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局（标题栏 + 搜索框 + 内容区 + 状态栏）
//!         mod components;     // 可复用组件（搜索框、状态栏、弹窗）
//!         mod pages;          // 页面内容（人物列表）
//!         pub mod theme;      // 主题和样式
//!
//!         pub use layout::render;
//!
//!
//!     渲染调用树：
//!         view::render(app, frame)            // layout.rs
//!             ├── render_title_bar
//!             ├── components::searchbar       // 搜索框（含未提交的草稿）
//!             ├── pages::characters           // 列表 / 空态 / 错误 / 分页栏
//!             ├── components::statusbar       // 快捷键提示 + 查询状态回显
//!             └── components::modal           // 弹窗（最上层，最后画）
//!
//!
//!     弹窗永远最后渲染：
//!         ratatui 按调用顺序叠加 widget，
//!         后画的盖住先画的，配合 Clear 清掉底下的内容，
//!         弹窗就"浮"在页面上方了。
//!
//!
//! View 层读取的状态全部来自 Model 层，
//! 包括加载状态机的阶段（Loading 显示转圈提示、Failed 显示错误）。
//! 任何交互都不在这里处理 —— 去 Event 层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
