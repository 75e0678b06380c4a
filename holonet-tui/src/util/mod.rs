//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 主要负责终端的初始化和恢复。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     终端类型定义：
//!         在 src/util/terminal.rs 中，有：
//!
//!             // 类型别名，简化长类型名
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!
//!     初始化终端（init_terminal）：
//!         · enable_raw_mode()
//!             - 关闭行缓冲与回显，允许读取单个按键事件
//!         · execute!(stdout, EnterAlternateScreen)
//!             - 切换到备用屏幕，退出后自动恢复原有终端内容
//!
//!
//!     恢复终端（restore_terminal）：
//!         · disable_raw_mode() + LeaveAlternateScreen + show_cursor()
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//! Util 层在应用启动时初始化终端，在应用退出时恢复终端。
//! 主循环在初始化后的终端中运行。
//!     —— 去往 src/app.rs 主循环吧
//!

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
