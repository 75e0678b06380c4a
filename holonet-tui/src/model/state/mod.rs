//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod characters;
mod modal;

pub use characters::CharactersState;
pub use modal::{Modal, ModalState};
