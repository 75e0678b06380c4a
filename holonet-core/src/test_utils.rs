//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use holonet_client::{
    ArchiveClient, Character, ClientError, Film, ListQuery, Page, Species, Starship, Vehicle,
};
use tokio::sync::RwLock;

use crate::services::{CatalogService, DetailService};

// ===== MockArchiveClient =====

/// 可编程的内存版 [`ArchiveClient`]
///
/// - 列表响应按 `(page, search)` 注册，未注册的键返回空页
/// - 关联记录按完整 URL 注册，未注册的 URL 返回 404
/// - 任意 URL 可注入指定错误
/// - 可选的固定延迟让并发重叠变得可观测（配合 `max_in_flight`）
pub struct MockArchiveClient {
    pages: RwLock<HashMap<(u32, String), Page<Character>>>,
    films: RwLock<HashMap<String, Film>>,
    vehicles: RwLock<HashMap<String, Vehicle>>,
    species: RwLock<HashMap<String, Species>>,
    starships: RwLock<HashMap<String, Starship>>,
    failing_urls: RwLock<HashMap<String, ClientError>>,
    list_error: RwLock<Option<ClientError>>,
    list_calls: RwLock<Vec<(u32, String)>>,
    delay: Option<Duration>,
    get_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockArchiveClient {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// 每个请求在返回前固定等待 `delay`
    pub fn with_delay(delay: Duration) -> Self {
        Self::build(Some(delay))
    }

    fn build(delay: Option<Duration>) -> Self {
        Self {
            pages: RwLock::new(HashMap::new()),
            films: RwLock::new(HashMap::new()),
            vehicles: RwLock::new(HashMap::new()),
            species: RwLock::new(HashMap::new()),
            starships: RwLock::new(HashMap::new()),
            failing_urls: RwLock::new(HashMap::new()),
            list_error: RwLock::new(None),
            list_calls: RwLock::new(Vec::new()),
            delay,
            get_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub async fn insert_page(&self, page: u32, search: &str, response: Page<Character>) {
        self.pages
            .write()
            .await
            .insert((page, search.to_string()), response);
    }

    pub async fn insert_film(&self, film: Film) {
        self.films.write().await.insert(film.url.clone(), film);
    }

    pub async fn insert_vehicle(&self, vehicle: Vehicle) {
        self.vehicles
            .write()
            .await
            .insert(vehicle.url.clone(), vehicle);
    }

    pub async fn insert_species(&self, species: Species) {
        self.species
            .write()
            .await
            .insert(species.url.clone(), species);
    }

    pub async fn insert_starship(&self, starship: Starship) {
        self.starships
            .write()
            .await
            .insert(starship.url.clone(), starship);
    }

    /// 让指定 URL 的 `get_*` 返回给定错误
    pub async fn fail_url(&self, url: &str, error: ClientError) {
        self.failing_urls
            .write()
            .await
            .insert(url.to_string(), error);
    }

    /// 让所有列表请求返回给定错误
    pub async fn fail_lists(&self, error: ClientError) {
        *self.list_error.write().await = Some(error);
    }

    /// 每次列表调用的 `(page, search)`，按调用顺序
    pub async fn list_calls(&self) -> Vec<(u32, String)> {
        self.list_calls.read().await.clone()
    }

    /// `get_*` 调用总数
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// 同时在途 `get_*` 调用的峰值
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn begin_get(&self, url: &str) -> Result<(), ClientError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(e) = self.failing_urls.read().await.get(url) {
            return Err(e.clone());
        }
        Ok(())
    }

    fn end_get(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }

    fn not_found(resource: &str) -> ClientError {
        ClientError::HttpStatus {
            resource: resource.to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        }
    }
}

#[async_trait]
impl ArchiveClient for MockArchiveClient {
    async fn list_characters(&self, query: &ListQuery) -> Result<Page<Character>, ClientError> {
        self.list_calls
            .write()
            .await
            .push((query.page, query.search.clone()));

        if let Some(e) = self.list_error.read().await.clone() {
            return Err(e);
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = (query.page, query.search.clone());
        Ok(self.pages.read().await.get(&key).cloned().unwrap_or_default())
    }

    async fn get_film(&self, url: &str) -> Result<Film, ClientError> {
        let result = match self.begin_get(url).await {
            Ok(()) => self
                .films
                .read()
                .await
                .get(url)
                .cloned()
                .ok_or_else(|| Self::not_found("films")),
            Err(e) => Err(e),
        };
        self.end_get();
        result
    }

    async fn get_vehicle(&self, url: &str) -> Result<Vehicle, ClientError> {
        let result = match self.begin_get(url).await {
            Ok(()) => self
                .vehicles
                .read()
                .await
                .get(url)
                .cloned()
                .ok_or_else(|| Self::not_found("vehicles")),
            Err(e) => Err(e),
        };
        self.end_get();
        result
    }

    async fn get_species(&self, url: &str) -> Result<Species, ClientError> {
        let result = match self.begin_get(url).await {
            Ok(()) => self
                .species
                .read()
                .await
                .get(url)
                .cloned()
                .ok_or_else(|| Self::not_found("species")),
            Err(e) => Err(e),
        };
        self.end_get();
        result
    }

    async fn get_starship(&self, url: &str) -> Result<Starship, ClientError> {
        let result = match self.begin_get(url).await {
            Ok(()) => self
                .starships
                .read()
                .await
                .get(url)
                .cloned()
                .ok_or_else(|| Self::not_found("starships")),
            Err(e) => Err(e),
        };
        self.end_get();
        result
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `CatalogService`
pub fn create_test_catalog_service() -> (CatalogService, Arc<MockArchiveClient>) {
    let mock = Arc::new(MockArchiveClient::new());
    (CatalogService::new(mock.clone()), mock)
}

/// 创建测试用 `DetailService`
pub fn create_test_detail_service() -> (DetailService, Arc<MockArchiveClient>) {
    let mock = Arc::new(MockArchiveClient::new());
    (DetailService::new(mock.clone()), mock)
}

/// 创建一个不引用任何关联记录的测试人物
pub fn test_character(name: &str) -> Character {
    test_character_with_relations(name, &[], &[], &[], &[])
}

/// 创建一个引用给定关联 URL 的测试人物
pub fn test_character_with_relations(
    name: &str,
    films: &[&str],
    vehicles: &[&str],
    species: &[&str],
    starships: &[&str],
) -> Character {
    let to_owned = |urls: &[&str]| urls.iter().map(ToString::to_string).collect();
    Character {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
        films: to_owned(films),
        species: to_owned(species),
        vehicles: to_owned(vehicles),
        starships: to_owned(starships),
        url: format!(
            "https://swapi.test/people/{}/",
            name.to_lowercase().replace(' ', "-")
        ),
        created: Utc::now(),
        edited: Utc::now(),
    }
}

pub fn test_film(title: &str, url: &str) -> Film {
    Film {
        title: title.to_string(),
        episode_id: 4,
        release_date: chrono::NaiveDate::from_ymd_opt(1977, 5, 25).unwrap_or_default(),
        url: url.to_string(),
    }
}

pub fn test_vehicle(name: &str, url: &str) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        model: "t-47 airspeeder".to_string(),
        url: url.to_string(),
    }
}

pub fn test_species(name: &str, url: &str) -> Species {
    Species {
        name: name.to_string(),
        classification: "mammal".to_string(),
        url: url.to_string(),
    }
}

pub fn test_starship(name: &str, url: &str) -> Starship {
    Starship {
        name: name.to_string(),
        model: "T-65 X-wing".to_string(),
        url: url.to_string(),
    }
}

/// 创建一页列表响应
pub fn page_of(characters: Vec<Character>, next: Option<&str>) -> Page<Character> {
    Page {
        count: characters.len() as u64,
        next: next.map(String::from),
        previous: None,
        results: characters,
    }
}
