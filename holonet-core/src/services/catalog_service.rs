//! 人物目录服务

use std::sync::Arc;

use holonet_client::{ArchiveClient, Character, ListQuery, Page};

use super::log_client_error;
use crate::error::{CoreError, CoreResult};

/// 人物目录服务（分页 + 搜索）
pub struct CatalogService {
    client: Arc<dyn ArchiveClient>,
}

impl CatalogService {
    /// 创建目录服务实例
    #[must_use]
    pub fn new(client: Arc<dyn ArchiveClient>) -> Self {
        Self { client }
    }

    /// 加载一页人物列表
    ///
    /// 查询先经过校验（页码向下钳制到 1），每次调用恰好发出一个列表请求。
    pub async fn load_page(&self, query: &ListQuery) -> CoreResult<Page<Character>> {
        let query = query.validated();

        match self.client.list_characters(&query).await {
            Ok(page) => {
                log::debug!(
                    "loaded {} characters (page {}, total {})",
                    page.results.len(),
                    query.page,
                    page.count
                );
                Ok(page)
            }
            Err(e) => {
                log_client_error("list_characters", &e);
                Err(CoreError::CharacterList(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::test_utils::{create_test_catalog_service, page_of, test_character};

    #[tokio::test]
    async fn load_page_forwards_validated_query() {
        let (service, mock) = create_test_catalog_service();

        let query = ListQuery {
            page: 0,
            search: "sky".to_string(),
        };
        let result = service.load_page(&query).await;
        assert!(result.is_ok(), "unexpected result: {result:?}");

        // 页码 0 在发出前被钳制到 1，且恰好一次请求
        let calls = mock.list_calls().await;
        assert_eq!(calls, vec![(1, "sky".to_string())]);
    }

    #[tokio::test]
    async fn load_page_returns_page_contents() {
        let (service, mock) = create_test_catalog_service();
        mock.insert_page(
            2,
            "",
            page_of(
                vec![test_character("Luke Skywalker"), test_character("Leia Organa")],
                None,
            ),
        )
        .await;

        let query = ListQuery {
            page: 2,
            search: String::new(),
        };
        let page = service.load_page(&query).await.unwrap();

        assert_eq!(page.results.len(), 2);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn load_page_wraps_client_error() {
        let (service, mock) = create_test_catalog_service();
        mock.fail_lists(ClientError::HttpStatus {
            resource: "people".to_string(),
            status: 500,
            reason: "Internal Server Error".to_string(),
        })
        .await;

        let result = service.load_page(&ListQuery::default()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CoreError::CharacterList(_)));
        assert!(err.to_string().starts_with("Failed to fetch characters:"));
    }
}
