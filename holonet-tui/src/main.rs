//! HoloNet Archive TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! HoloNet Archive TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     ListQuery::from_query_string()      // 解析可选的启动深链接参数
//!     Runtime::new()                      // 创建 tokio 运行时并在 main 中保活
//!     mpsc::unbounded_channel()           // 后台完成消息的回传通道
//!     Backend::new()                      // 持有运行时句柄 + 通道发送端
//!     init_terminal()                     // 初始化终端，以为 terminal: Terminal<...>
//!     model::App::new(query)              // 创建 APP 实例
//!     update(Load)                        // 发起首屏加载（挂载即加载）
//!     app::run()                          // 运行 app.rs 主循环
//!     restore_terminal()                  // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! ## 深链接
//!
//! 第一个位置参数是可选的查询字符串，形如原 Web 版地址栏里的内容：
//!
//! ```bash
//! holonet-tui 'search=luke&page=2'
//! holonet-tui '?search=r2'                # 前导 ? 可带可不带
//! ```
//!
//! 缺省或无法解析的值回退到默认查询（第 1 页，无搜索词）。
//! 当前查询随时显示在状态栏里，可以直接复制给别人。
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · 返回 Terminal 对象
//!
//!
//!     App::new(query)           // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()     // from /app.rs

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use holonet_client::ListQuery;
use message::{AppMessage, ContentMessage};
use util::{init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 解析启动深链接（可选的查询字符串参数）
    let query = std::env::args()
        .nth(1)
        .map_or_else(ListQuery::default, |arg| {
            ListQuery::from_query_string(&arg)
        });

    // 2. 创建 tokio 运行时（Backend 只持有句柄，运行时本体在这里保活）
    let runtime = Runtime::new()?;

    // 3. 创建后台完成消息的回传通道和后台服务
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = backend::Backend::new(runtime.handle().clone(), tx);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并发起首屏加载
    let mut app = model::App::new(query);
    update::update(&mut app, &backend, AppMessage::Content(ContentMessage::Load));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 返回结果
    result
}
