//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，main.rs 已经创建好了四样东西：
//!
//!     terminal        已进入备用屏幕的终端
//!     app             App 初始状态（查询来自可选的启动深链接参数）
//!     backend         持有 tokio 运行时句柄和回传通道发送端
//!     rx              回传通道接收端（后台任务的完成消息从这里进来）
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Ok(msg) = rx.try_recv() {             // 先排空后台完成消息
//!         update::update(&mut app, &backend, msg)         // PageLoaded / DetailsLoaded
//!     }                                               // 过期代际在状态机里被丢弃
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , &backend , msg)       // 更新终端状态
//!     }
//! }
//!
//!
//! 没有事件时 poll 在 100ms 后超时返回 None，
//! 循环回到排空通道那一步 —— 这就是后台结果的最大上屏延迟。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 排空后台任务的完成消息
        while let Ok(msg) = rx.try_recv() {
            update::update(app, backend, msg);
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
