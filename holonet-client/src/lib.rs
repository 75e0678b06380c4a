//! # holonet-client
//!
//! Client library for the [Star Wars API](https://swapi.dev/) (SWAPI), the
//! remote catalog behind the HoloNet archive browser.
//!
//! The crate exposes two layers:
//!
//! - [`ArchiveClient`] — the trait the browsing logic is written against.
//!   Anything that can list characters and resolve related records by URL
//!   qualifies; tests inject a mock, the application injects [`SwapiClient`].
//! - [`SwapiClient`] — the `reqwest`-backed implementation with uniform
//!   timeouts, status triage, and debug logging.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and
//!   static binaries.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! holonet-client = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use holonet_client::{ArchiveClient, ListQuery, SwapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwapiClient::new();
//!
//!     // Search the catalog, first page
//!     let mut query = ListQuery::default();
//!     query.set_search("sky");
//!     let page = client.list_characters(&query).await?;
//!     for character in &page.results {
//!         println!("{} ({})", character.name, character.birth_year);
//!     }
//!
//!     // Resolve a related record by the URL embedded in the summary
//!     if let Some(url) = page.results.first().and_then(|c| c.films.first()) {
//!         let film = client.get_film(url).await?;
//!         println!("appears in {}", film.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Deep Links
//!
//! [`ListQuery`] doubles as the shareable view state and round-trips the
//! query-string form the original web UI kept in the address bar:
//!
//! ```rust
//! use holonet_client::ListQuery;
//!
//! let query = ListQuery::from_query_string("?search=luke&page=2");
//! assert_eq!(query.page, 2);
//! assert_eq!(query.to_query_string(), "search=luke&page=2");
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). The error
//! enum provides structured variants for the common failure modes:
//!
//! - [`ClientError::HttpStatus`] — non-2xx response, message carries the
//!   status text
//! - [`ClientError::NetworkError`] — transport failure
//! - [`ClientError::Timeout`] — request exceeded the 30 s budget
//! - [`ClientError::RateLimited`] — HTTP 429 with optional `Retry-After`
//!
//! There is no built-in retry: failures surface immediately and the caller
//! decides what to do. [`ClientError::is_expected`] classifies a failure for
//! log-level purposes.

mod error;
mod http;
mod traits;
mod types;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export the client trait and the concrete implementation
pub use http::SwapiClient;
pub use traits::ArchiveClient;

// Re-export types
pub use types::{Character, Film, ListQuery, Page, Species, Starship, Vehicle};
