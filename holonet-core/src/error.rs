//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use holonet_client::ClientError;

/// Core layer error type
///
/// Wraps the client error with the operation that failed, so messages shown
/// to the user name what was being loaded rather than a bare transport error.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Character list page could not be loaded
    #[error("Failed to fetch characters: {0}")]
    CharacterList(#[source] ClientError),

    /// Related records for a character could not be resolved
    #[error("Failed to fetch character details: {0}")]
    CharacterDetails(#[source] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CharacterList(e) | Self::CharacterDetails(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
