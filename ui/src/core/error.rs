//! Error taxonomy for submission, rendering, and export. Every error stays
//! contained to the pipeline or panel that produced it.

use thiserror::Error;

/// Raised before any network call when the submission form holds no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("enter some text or attach a file before analyzing")]
pub struct ValidationError;

/// A request that reached the network layer and came back unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The backend rejected the request and explained itself via `detail`.
    #[error("{0}")]
    Rejected(String),
    /// Non-2xx response without a structured `detail` field.
    #[error("analysis failed with status {0}")]
    Status(u16),
    /// The request never completed (DNS, connection, fetch failure).
    #[error("network error: {0}")]
    Transport(String),
    /// 2xx response whose body did not decode as an analysis result.
    #[error(transparent)]
    Malformed(#[from] MalformedResponseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed analysis response: {0}")]
pub struct MalformedResponseError(pub String);

/// Chart construction failure. Caught locally; only the chart region of the
/// originating pipeline shows a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("chart series is empty")]
    EmptySeries,
    #[error("chart value for {0:?} is not finite")]
    NonFiniteValue(String),
}

/// Export attempted before both sentiment pipelines have produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run an analysis on both sentiment pipelines before exporting")]
pub struct MissingDataError;
