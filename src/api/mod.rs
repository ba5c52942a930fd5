//! Remote collaborators
//!
//! Traits for the two things the session talks to over the network: the
//! mentor list source and the favorites store. `HttpApi` implements both
//! against the directory's REST API; `InMemoryApi` implements both for tests
//! and local development.

mod error;
mod http;


pub use error::ApiError;
pub use http::HttpApi;

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::favorites::FavoriteSet;
use crate::models::Mentor;

/// Where the mentor list comes from
#[async_trait]
pub trait MentorSource: Send + Sync {
    /// Fetch the full mentor list
    async fn fetch_mentors(&self) -> Result<Vec<Mentor>, ApiError>;
}

/// Remote persistence for favorite mentor ids
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Favorite ids known to the server.
    ///
    /// `ApiError::Auth` when no authenticated session exists; the caller
    /// treats that as a valid empty state, not a failure.
    async fn fetch_favorite_ids(&self) -> Result<FavoriteSet, ApiError>;

    /// Tell the server about ids it has not seen yet
    async fn push_favorite_ids(&self, delta: &FavoriteSet) -> Result<(), ApiError>;
}

/// In-memory implementation of both collaborators, for tests and local
/// development
#[derive(Default)]
pub struct InMemoryApi {
    mentors: Vec<Mentor>,
    favorites: Mutex<FavoriteSet>,
    authenticated: bool,
    fail_mentor_fetch: bool,
    /// Number of upcoming push attempts that should fail
    push_failures: AtomicU32,
    mentor_fetch_calls: AtomicUsize,
    pushes: Mutex<Vec<FavoriteSet>>,
}

impl InMemoryApi {
    pub fn new(mentors: Vec<Mentor>) -> Self {
        Self {
            mentors,
            authenticated: true,
            ..Default::default()
        }
    }

    pub fn with_favorites(mut self, favorites: FavoriteSet) -> Self {
        self.favorites = Mutex::new(favorites);
        self
    }

    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn with_mentor_failure(mut self) -> Self {
        self.fail_mentor_fetch = true;
        self
    }

    pub fn with_push_failures(self, count: u32) -> Self {
        self.push_failures.store(count, Ordering::SeqCst);
        self
    }

    /// How often the mentor list was fetched
    pub fn mentor_fetch_calls(&self) -> usize {
        self.mentor_fetch_calls.load(Ordering::SeqCst)
    }

    /// Every delta that was pushed successfully, in order
    pub fn pushes(&self) -> Vec<FavoriteSet> {
        self.pushes.lock().unwrap().clone()
    }
}

#[async_trait]
impl MentorSource for InMemoryApi {
    async fn fetch_mentors(&self) -> Result<Vec<Mentor>, ApiError> {
        self.mentor_fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mentor_fetch {
            return Err(ApiError::Status(
                StatusCode::SERVICE_UNAVAILABLE,
                "mentors".to_string(),
            ));
        }
        Ok(self.mentors.clone())
    }
}

#[async_trait]
impl FavoritesStore for InMemoryApi {
    async fn fetch_favorite_ids(&self) -> Result<FavoriteSet, ApiError> {
        if !self.authenticated {
            return Err(ApiError::Auth);
        }
        Ok(self.favorites.lock().unwrap().clone())
    }

    async fn push_favorite_ids(&self, delta: &FavoriteSet) -> Result<(), ApiError> {
        if !self.authenticated {
            return Err(ApiError::Auth);
        }
        if self
            .push_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ApiError::Status(
                StatusCode::INTERNAL_SERVER_ERROR,
                "favorites".to_string(),
            ));
        }
        self.favorites.lock().unwrap().extend(delta.iter().cloned());
        self.pushes.lock().unwrap().push(delta.clone());
        Ok(())
    }
}
