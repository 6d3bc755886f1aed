//! reqwest-backed [`PostSource`] against the Twitter v2 REST API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Settings;
use crate::source::{Post, PostSource, User, UserRef};

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(4);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The v2 API wraps every payload; `data` is absent when nothing matched.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: reqwest::Client,
    base: String,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("building http client")?;

        Ok(Self {
            http,
            base: settings.api_base.trim_end_matches('/').to_string(),
            bearer_token: settings.bearer_token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Envelope<T>> {
        debug!(%url, "remote lookup");
        let resp = self
            .http
            .get(url)
            .query(params)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?
            .error_for_status()
            .with_context(|| format!("remote status for {url}"))?;

        resp.json::<Envelope<T>>()
            .await
            .with_context(|| format!("decoding response from {url}"))
    }
}

#[async_trait]
impl PostSource for TwitterClient {
    async fn search_posts(&self, query: &str, limit: u16) -> Result<Vec<Post>> {
        let url = format!("{}/2/tweets/search/recent", self.base);
        let params = [
            ("query", query.to_string()),
            ("max_results", limit.to_string()),
            ("tweet.fields", "created_at,author_id,lang".to_string()),
        ];
        let envelope: Envelope<Vec<Post>> = self.get_json(&url, &params).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn get_likers(&self, post_id: &str) -> Result<Option<Vec<UserRef>>> {
        let url = format!("{}/2/tweets/{post_id}/liking_users", self.base);
        let envelope: Envelope<Vec<UserRef>> = self.get_json(&url, &[]).await?;
        Ok(envelope.data)
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        let url = format!("{}/2/users/{user_id}", self.base);
        let envelope: Envelope<User> = self.get_json(&url, &[]).await?;
        envelope
            .data
            .with_context(|| format!("user {user_id} not found"))
    }
}
