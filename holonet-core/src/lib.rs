//! HoloNet Core Library
//!
//! Provides the browsing logic for the HoloNet archive browser, including:
//! - Character catalog loading (Catalog Service)
//! - Related-record aggregation (Detail Service)
//! - List / detail state machines with generation-tagged request sequencing
//!
//! This library is UI-independent: it talks to the archive through the
//! injected [`ArchiveClient`](holonet_client::ArchiveClient) trait and never
//! renders anything itself, so it works the same under a TUI or any other
//! frontend.

pub mod error;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ClientError, CoreError, CoreResult};
pub use services::{CatalogService, DetailService, MAX_CONCURRENT_FETCHES};
pub use state::{CharacterDetails, DetailState, ListState, Phase};
