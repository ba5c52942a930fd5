//! HTTP implementation of the remote collaborators
//!
//! Talks to the mentor directory REST API:
//!   GET  /mentors          -> list of mentor records
//!   GET  /favorites        -> list of favorited mentor ids (authenticated)
//!   POST /favorites        -> add ids to the server-side favorites (authenticated)

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{ApiError, FavoritesStore, MentorSource};
use crate::config::ClientConfig;
use crate::favorites::FavoriteSet;
use crate::models::Mentor;

/// reqwest-backed API client
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HttpApi {
    /// Build a client from the configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn token(&self) -> Result<&str, ApiError> {
        self.auth_token.as_deref().ok_or(ApiError::Auth)
    }
}

#[async_trait]
impl MentorSource for HttpApi {
    async fn fetch_mentors(&self) -> Result<Vec<Mentor>, ApiError> {
        let response = self.client.get(self.url("mentors")).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status(), "mentors".to_string()));
        }
        let mentors: Vec<Mentor> = response.json().await.map_err(ApiError::Decode)?;
        debug!(count = mentors.len(), "fetched mentor list");
        Ok(mentors)
    }
}

#[async_trait]
impl FavoritesStore for HttpApi {
    async fn fetch_favorite_ids(&self) -> Result<FavoriteSet, ApiError> {
        let token = self.token()?;
        let response = self
            .client
            .get(self.url("favorites"))
            .bearer_auth(token)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status(), "favorites".to_string()));
        }
        let ids: Vec<String> = response.json().await.map_err(ApiError::Decode)?;
        Ok(ids.into_iter().collect())
    }

    async fn push_favorite_ids(&self, delta: &FavoriteSet) -> Result<(), ApiError> {
        let token = self.token()?;
        let ids: Vec<&String> = delta.iter().collect();
        let response = self
            .client
            .post(self.url("favorites"))
            .bearer_auth(token)
            .json(&ids)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Auth);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status(), "favorites".to_string()));
        }
        debug!(count = delta.len(), "pushed favorites delta");
        Ok(())
    }
}
