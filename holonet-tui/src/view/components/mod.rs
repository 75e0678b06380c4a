//! 可复用 UI 组件
//!
//! 每个组件一个文件，只负责渲染，不持有状态

pub mod modal;
pub mod searchbar;
pub mod statusbar;
