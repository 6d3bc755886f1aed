use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything surfaces to the `run_query` caller; the core performs no
/// internal recovery, retries or caching.
#[derive(Debug, Error)]
pub enum Error {
    /// Asked to summarize zero posts.
    #[error("cannot summarize an empty post set")]
    EmptyInput,

    /// The search matched no posts; downstream aggregation is skipped.
    #[error("no posts matched the query")]
    EmptyResultSet,

    /// Rejected before any remote call: empty term, limit out of range.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Network/auth/rate-limit failure from the remote service, unmodified.
    #[error("remote service failure: {0}")]
    Remote(anyhow::Error),
}
