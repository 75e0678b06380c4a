//! 页面视图模块
//!
//! 每个页面一个文件，负责把对应的 Model 状态渲染到内容区

pub mod characters;
