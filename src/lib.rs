// Public library surface for integration tests (and potential reuse).

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod normalize;
pub mod query;
pub mod sentiment;
pub mod source;
pub mod twitter;
pub mod words;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::error::{Error, Result};
pub use crate::query::{run_query, QueryParams, ResultBundle};
