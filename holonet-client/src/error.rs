use serde::{Deserialize, Serialize};

/// Unified error type for all archive API operations.
///
/// Each variant includes a `resource` field identifying which API collection
/// the request targeted (`"people"`, `"films"`, `"vehicles"`, `"species"`,
/// `"starships"`), plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// There is no retry machinery in this client — every failure is surfaced to
/// the caller on the first attempt. [`is_expected`](Self::is_expected) exists
/// only to pick a log level for a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, body read failure, etc.).
    NetworkError {
        /// API collection the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// API collection the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// API collection the request targeted.
        resource: String,
        /// Suggested wait time in seconds before retrying, from the
        /// `Retry-After` header if present.
        retry_after: Option<u64>,
        /// Raw response body, if one could be read.
        raw_message: Option<String>,
    },

    /// The server answered with a non-success status (other than 429).
    ///
    /// Carries the numeric status and its canonical reason phrase, so the
    /// rendered message always contains the status text. A page number past
    /// the end of the collection surfaces here as `404 Not Found`.
    HttpStatus {
        /// API collection the request targeted.
        resource: String,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },

    /// Failed to parse the API response as the expected JSON shape.
    ParseError {
        /// API collection the request targeted.
        resource: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ClientError {
    /// 是否为预期行为（客户端侧 4xx，例如翻页越界的 404），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { resource, detail } => {
                write!(f, "[{resource}] Network error: {detail}")
            }
            Self::Timeout { resource, detail } => {
                write!(f, "[{resource}] Request timeout: {detail}")
            }
            Self::RateLimited {
                resource,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{resource}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{resource}] Rate limited")
                }
            }
            Self::HttpStatus {
                resource,
                status,
                reason,
            } => {
                write!(f, "[{resource}] Request failed: {status} {reason}")
            }
            Self::ParseError { resource, detail } => {
                write!(f, "[{resource}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
