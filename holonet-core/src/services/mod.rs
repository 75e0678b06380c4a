//! 业务逻辑服务层

mod catalog_service;
mod detail_service;

pub use catalog_service::CatalogService;
pub use detail_service::{DetailService, MAX_CONCURRENT_FETCHES};

use holonet_client::ClientError;

/// 按错误分类选择日志级别，在包装为 [`CoreError`](crate::CoreError) 前调用
pub(crate) fn log_client_error(operation: &str, error: &ClientError) {
    if error.is_expected() {
        log::warn!("{operation} failed: {error}");
    } else {
        log::error!("{operation} failed: {error}");
    }
}
