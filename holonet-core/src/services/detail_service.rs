//! 人物详情聚合服务

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use holonet_client::{ArchiveClient, Character, ClientError};

use super::log_client_error;
use crate::error::{CoreError, CoreResult};
use crate::state::CharacterDetails;

/// 单个类别内同时在途请求数上限
///
/// 一个人物可能引用几十个关联资源；窗口把单个类别的瞬时并发压到常数，
/// 四个类别之间仍然并行，整体在途上限为 4 × 8。窗口只影响发出节奏，
/// 不影响结果：聚合仍然是全有或全无。
pub const MAX_CONCURRENT_FETCHES: usize = 8;

/// 人物详情聚合服务
///
/// 把一个人物引用的 films / vehicles / species / starships URL 解析成
/// 完整记录。四个类别并行聚合，任何一个请求失败都会使整次聚合失败。
pub struct DetailService {
    client: Arc<dyn ArchiveClient>,
}

impl DetailService {
    /// 创建详情服务实例
    #[must_use]
    pub fn new(client: Arc<dyn ArchiveClient>) -> Self {
        Self { client }
    }

    /// 解析一个人物的全部关联记录
    ///
    /// 各类别内部保持 URL 引用顺序；第一个失败会取消其余类别的聚合。
    pub async fn fetch_details(&self, character: &Character) -> CoreResult<CharacterDetails> {
        let client = &self.client;

        let films = fetch_ordered(&character.films, |url: String| async move {
            client.get_film(&url).await
        });
        let vehicles = fetch_ordered(&character.vehicles, |url: String| async move {
            client.get_vehicle(&url).await
        });
        let species = fetch_ordered(&character.species, |url: String| async move {
            client.get_species(&url).await
        });
        let starships = fetch_ordered(&character.starships, |url: String| async move {
            client.get_starship(&url).await
        });

        match futures::try_join!(films, vehicles, species, starships) {
            Ok((films, vehicles, species, starships)) => {
                log::debug!(
                    "resolved details for {}: {} films, {} vehicles, {} species, {} starships",
                    character.name,
                    films.len(),
                    vehicles.len(),
                    species.len(),
                    starships.len()
                );
                Ok(CharacterDetails {
                    films,
                    vehicles,
                    species,
                    starships,
                })
            }
            Err(e) => {
                log_client_error("fetch_details", &e);
                Err(CoreError::CharacterDetails(e))
            }
        }
    }
}

/// 按给定顺序解析一组 URL，同时在途不超过 [`MAX_CONCURRENT_FETCHES`]
///
/// 结果顺序与 `urls` 一致。任何一个请求失败立即向上返回，后续分块不再发出。
async fn fetch_ordered<T, F, Fut>(urls: &[String], fetch: F) -> Result<Vec<T>, ClientError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut items = Vec::with_capacity(urls.len());
    for chunk in urls.chunks(MAX_CONCURRENT_FETCHES) {
        for result in join_all(chunk.iter().cloned().map(&fetch)).await {
            items.push(result?);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::state::Phase;
    use crate::test_utils::{
        create_test_detail_service, test_character_with_relations, test_film, test_species,
        test_starship, test_vehicle, MockArchiveClient,
    };

    #[tokio::test]
    async fn fetch_details_resolves_all_categories() {
        let (service, mock) = create_test_detail_service();
        mock.insert_film(test_film("A New Hope", "https://swapi.test/films/1/"))
            .await;
        mock.insert_film(test_film(
            "The Empire Strikes Back",
            "https://swapi.test/films/2/",
        ))
        .await;
        mock.insert_vehicle(test_vehicle("Snowspeeder", "https://swapi.test/vehicles/14/"))
            .await;
        mock.insert_starship(test_starship("X-wing", "https://swapi.test/starships/12/"))
            .await;

        let character = test_character_with_relations(
            "Luke Skywalker",
            &["https://swapi.test/films/1/", "https://swapi.test/films/2/"],
            &["https://swapi.test/vehicles/14/"],
            &[],
            &["https://swapi.test/starships/12/"],
        );

        let details = service.fetch_details(&character).await.unwrap();

        assert_eq!(details.films.len(), 2);
        assert_eq!(details.films[0].title, "A New Hope");
        assert_eq!(details.vehicles.len(), 1);
        assert!(details.species.is_empty());
        assert_eq!(details.starships.len(), 1);
    }

    #[tokio::test]
    async fn fetch_details_without_relations_makes_no_requests() {
        let (service, mock) = create_test_detail_service();

        let character = test_character_with_relations("Ric Olié", &[], &[], &[], &[]);
        let details = service.fetch_details(&character).await.unwrap();

        assert_eq!(details, CharacterDetails::default());
        assert_eq!(mock.get_calls(), 0);
    }

    #[tokio::test]
    async fn fetch_details_preserves_url_order_across_chunks() {
        let (service, mock) = create_test_detail_service();

        let mut urls = Vec::new();
        for i in 0..20 {
            let url = format!("https://swapi.test/films/{i}/");
            mock.insert_film(test_film(&format!("Film {i:02}"), &url)).await;
            urls.push(url);
        }
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        let character = test_character_with_relations("Luke Skywalker", &url_refs, &[], &[], &[]);

        let details = service.fetch_details(&character).await.unwrap();

        let titles: Vec<&str> = details.films.iter().map(|f| f.title.as_str()).collect();
        let expected: Vec<String> = (0..20).map(|i| format!("Film {i:02}")).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn fetch_details_is_all_or_nothing() {
        let (service, mock) = create_test_detail_service();
        mock.insert_film(test_film("A New Hope", "https://swapi.test/films/1/"))
            .await;
        mock.insert_vehicle(test_vehicle("Snowspeeder", "https://swapi.test/vehicles/14/"))
            .await;
        mock.fail_url(
            "https://swapi.test/vehicles/30/",
            ClientError::HttpStatus {
                resource: "vehicles".to_string(),
                status: 500,
                reason: "Internal Server Error".to_string(),
            },
        )
        .await;

        let character = test_character_with_relations(
            "Luke Skywalker",
            &["https://swapi.test/films/1/"],
            &[
                "https://swapi.test/vehicles/14/",
                "https://swapi.test/vehicles/30/",
            ],
            &[],
            &[],
        );

        let result = service.fetch_details(&character).await;
        let err = result.unwrap_err();
        assert!(matches!(err, CoreError::CharacterDetails(_)));
        assert!(err
            .to_string()
            .starts_with("Failed to fetch character details:"));
    }

    #[tokio::test]
    async fn concurrent_fetches_bounded_by_window() {
        let mock = std::sync::Arc::new(MockArchiveClient::with_delay(Duration::from_millis(10)));
        let service = DetailService::new(mock.clone());

        let mut urls = Vec::new();
        for i in 0..20 {
            let url = format!("https://swapi.test/species/{i}/");
            mock.insert_species(test_species(&format!("Species {i}"), &url))
                .await;
            urls.push(url);
        }
        let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        let character = test_character_with_relations("Jabba", &[], &[], &url_refs, &[]);

        service.fetch_details(&character).await.unwrap();

        assert!(mock.max_in_flight() <= MAX_CONCURRENT_FETCHES);
        assert!(mock.max_in_flight() > 1, "fetches should overlap");
    }

    // 与状态机串起来的失败路径：聚合失败后详情侧呈现全空聚合
    #[tokio::test]
    async fn failed_aggregation_drives_state_to_empty_aggregate() {
        let (service, mock) = create_test_detail_service();
        mock.fail_url(
            "https://swapi.test/films/9/",
            ClientError::NetworkError {
                resource: "films".to_string(),
                detail: "connection reset".to_string(),
            },
        )
        .await;

        let character = test_character_with_relations(
            "Boba Fett",
            &["https://swapi.test/films/9/"],
            &[],
            &[],
            &[],
        );

        let mut state = crate::state::DetailState::new();
        let generation = state.begin_load();
        let result = service.fetch_details(&character).await;
        assert!(state.complete(generation, result));

        assert_eq!(state.phase(), Phase::Failed);
        assert_eq!(state.details().unwrap(), &CharacterDetails::default());
        assert!(state.error().is_some());
    }
}
