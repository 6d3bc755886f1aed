//! Data model and the remote-service boundary.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One retrieved post. Immutable once fetched; owned by the orchestrator
/// for the duration of a single query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lang: Option<String>,
}

/// Per-post metadata joined by id: author display name and like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub username: String,
    pub like_count: u64,
}

/// Opaque reference to a user who liked a post; only its presence matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// The three outbound operations the orchestrator consumes as black boxes.
/// Timeouts, auth and rate limits are the implementation's business; every
/// failure propagates upward uninterpreted.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Up to `limit` recent posts matching the search expression.
    async fn search_posts(&self, query: &str, limit: u16) -> Result<Vec<Post>>;

    /// Users who liked a post; `None` when the remote returns no data
    /// member (zero likes).
    async fn get_likers(&self, post_id: &str) -> Result<Option<Vec<UserRef>>>;

    async fn get_user(&self, user_id: &str) -> Result<User>;
}
