use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Character, Film, ListQuery, Page, Species, Starship, Vehicle};

/// Abstraction over the remote archive API.
///
/// Everything above the wire goes through this trait: the browsing services
/// take an `Arc<dyn ArchiveClient>` instead of a concrete HTTP client, so
/// list loading and detail aggregation can be driven by a mock in tests and
/// by [`SwapiClient`](crate::SwapiClient) in the running application.
///
/// Implementations must be cheap to call concurrently — detail aggregation
/// issues many overlapping `get_*` calls against one instance.
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    /// Fetch one page of the character list.
    ///
    /// `query` carries the 1-indexed page number and the search term; an
    /// empty search term means "no filter". Implementations should validate
    /// the query rather than forward out-of-range values.
    async fn list_characters(&self, query: &ListQuery) -> Result<Page<Character>>;

    /// Resolve a film record by its canonical URL.
    async fn get_film(&self, url: &str) -> Result<Film>;

    /// Resolve a vehicle record by its canonical URL.
    async fn get_vehicle(&self, url: &str) -> Result<Vehicle>;

    /// Resolve a species record by its canonical URL.
    async fn get_species(&self, url: &str) -> Result<Species>;

    /// Resolve a starship record by its canonical URL.
    async fn get_starship(&self, url: &str) -> Result<Starship>;
}
