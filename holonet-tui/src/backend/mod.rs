//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的业务逻辑。
//! 通过 holonet-core 库实现真实的目录浏览与详情聚合功能。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、异步桥接
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环是同步的（terminal.draw + poll_event），
//!     而 holonet-core 的服务是异步的。两者通过两样东西桥接：
//!
//!         1. tokio 运行时句柄（Handle）
//!            main.rs 创建运行时并保持存活，Backend 只持有句柄，
//!            每次请求用 handle.spawn 抛到运行时上执行。
//!
//!         2. 无界 channel（UnboundedSender<AppMessage>）
//!            后台任务完成后，把结果包装成 PageLoaded / DetailsLoaded
//!            消息发回主循环。主循环在每次渲染前用 try_recv 排空队列。
//!
//!     于是 UI 线程永远不等待网络；
//!     它只是在下一帧"发现"结果已经到了。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、代际标记
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     spawn_xxx 的调用方（Update 层）先向状态机索取代际标记
//!     （begin_load() 返回 u64），再把标记传给本层。
//!     完成消息原样携带标记回去，状态机据此丢弃过期响应 ——
//!     快速翻页时，旧页的慢响应不会覆盖新页的数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 → 翻到下一页
//!         ↓
//!     Update 层处理 ContentMessage::NextPage
//!         ↓
//!     query.next_page() + list.begin_load() → generation
//!         ↓
//!     backend.spawn_load_characters(query, generation)
//!         ↓
//!     holonet-core CatalogService 调用 SWAPI
//!         ↓
//!     结果经 channel 回传：ContentMessage::PageLoaded { generation, result }
//!         ↓
//!     Update 层调用 list.complete(generation, result)
//!         ↓
//!     View 层重新渲染
//!

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use holonet_client::{ArchiveClient, Character, ListQuery, SwapiClient};
use holonet_core::{CatalogService, DetailService};

use crate::message::{AppMessage, ContentMessage, ModalMessage};

/// TUI 后台服务
///
/// 持有注入的客户端，按需构造 holonet-core 的服务，
/// 并把异步结果经 channel 回传主循环。
pub struct Backend {
    /// tokio 运行时句柄（运行时本体在 main.rs 中保活）
    handle: Handle,
    /// 完成消息的回传通道
    tx: UnboundedSender<AppMessage>,
    /// 注入的目录客户端
    client: Arc<dyn ArchiveClient>,
}

impl Backend {
    /// 创建后台服务实例（使用真实的 SWAPI 客户端）
    pub fn new(handle: Handle, tx: UnboundedSender<AppMessage>) -> Self {
        Self::with_client(handle, tx, Arc::new(SwapiClient::new()))
    }

    /// 以注入的客户端创建后台服务实例（测试用）
    pub fn with_client(
        handle: Handle,
        tx: UnboundedSender<AppMessage>,
        client: Arc<dyn ArchiveClient>,
    ) -> Self {
        Self { handle, tx, client }
    }

    /// 获取目录服务
    fn catalog(&self) -> CatalogService {
        CatalogService::new(self.client.clone())
    }

    /// 获取详情聚合服务
    fn details(&self) -> DetailService {
        DetailService::new(self.client.clone())
    }

    /// 在后台加载一页人物列表
    pub fn spawn_load_characters(&self, query: ListQuery, generation: u64) {
        let catalog = self.catalog();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let result = catalog.load_page(&query).await;
            let msg = AppMessage::Content(ContentMessage::PageLoaded { generation, result });
            if tx.send(msg).is_err() {
                log::debug!("ui channel closed, dropping page load result");
            }
        });
    }

    /// 在后台聚合一个人物的全部关联记录
    pub fn spawn_load_details(&self, character: Character, generation: u64) {
        let details = self.details();
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let result = details.fetch_details(&character).await;
            let msg = AppMessage::Modal(ModalMessage::DetailsLoaded { generation, result });
            if tx.send(msg).is_err() {
                log::debug!("ui channel closed, dropping detail result");
            }
        });
    }
}
