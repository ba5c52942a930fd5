//! Session coordination
//!
//! `MentorSession` is the single owner of all shared client state: the
//! mentor list, the authoritative favorite set and the filter criteria.
//! The UI shell drives it with discrete events (initialize, toggle, filter
//! change) and reads views back; nothing in here is mutated concurrently.
//!
//! Startup issues the mentor fetch and the favorites fetch concurrently and
//! degrades gracefully: a failed mentor fetch leaves an empty but responsive
//! list, and an anonymous session simply keeps favorites local.

mod title;


pub use title::window_title;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::api::{FavoritesStore, HttpApi, MentorSource};
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::favorites::{self, FavoriteSet};
use crate::filter::{self, FilterCriteria};
use crate::models::Mentor;
use crate::storage::FavoritesCache;
use crate::telemetry::{LogSink, TelemetryEvent, TelemetrySink};

/// Delay between push attempts, scaled by the attempt number
const PUSH_RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Lifecycle of the session favorites state.
///
/// `Unloaded -> Loading -> Ready`, never back to `Loading` for the lifetime
/// of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing fetched yet
    Unloaded,
    /// Cache read and remote fetches in flight
    Loading,
    /// Local and remote favorites reconciled; the in-memory set is
    /// authoritative from here on
    Ready,
}

/// The session object owning all client-side directory state
pub struct MentorSession {
    config: ClientConfig,
    mentor_source: Arc<dyn MentorSource>,
    favorites_store: Arc<dyn FavoritesStore>,
    cache: FavoritesCache,
    telemetry: Arc<dyn TelemetrySink>,

    phase: SessionPhase,
    mentors: Vec<Mentor>,
    favorites: FavoriteSet,
    criteria: FilterCriteria,
}

impl MentorSession {
    /// Create a session with explicit collaborators
    pub fn new(
        config: ClientConfig,
        mentor_source: Arc<dyn MentorSource>,
        favorites_store: Arc<dyn FavoritesStore>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        let cache = FavoritesCache::new(config.cache_path.clone());
        Self {
            config,
            mentor_source,
            favorites_store,
            cache,
            telemetry,
            phase: SessionPhase::Unloaded,
            mentors: Vec::new(),
            favorites: FavoriteSet::new(),
            criteria: FilterCriteria::default(),
        }
    }

    /// Create a session talking to the real API, logging telemetry
    pub fn connect(config: ClientConfig) -> Result<Self, AppError> {
        let api = Arc::new(HttpApi::new(&config)?);
        Ok(Self::new(
            config,
            api.clone(),
            api,
            Arc::new(LogSink),
        ))
    }

    /// Load the mentor list and reconcile favorites.
    ///
    /// The mentor fetch and the remote favorites fetch run concurrently.
    /// Calling this again once loading has started is a no-op; there is no
    /// transition back to `Loading`.
    pub async fn initialize(&mut self) {
        if self.phase != SessionPhase::Unloaded {
            debug!(phase = ?self.phase, "initialize called again; ignoring");
            return;
        }
        self.phase = SessionPhase::Loading;

        self.telemetry.report(TelemetryEvent::PageView {
            path: "/".to_string(),
        });
        if let Some(notice) = &self.config.maintenance_message {
            warn!("maintenance notice active: {notice}");
        }

        let cached = self.cache.read();
        let (mentors, remote) =
            tokio::join!(self.fetch_mentor_list(), self.fetch_remote_favorites());
        self.mentors = mentors;

        let outcome = favorites::reconcile(&cached, &remote);
        self.favorites = outcome.merged;
        self.cache.write(&self.favorites);

        if !outcome.to_push.is_empty() && self.config.is_authenticated() {
            push_with_retry(
                self.favorites_store.as_ref(),
                &outcome.to_push,
                self.config.push_retry_limit,
            )
            .await;
        }

        self.phase = SessionPhase::Ready;
        info!(
            mentors = self.mentors.len(),
            favorites = self.favorites.len(),
            "session ready"
        );
    }

    async fn fetch_mentor_list(&self) -> Vec<Mentor> {
        match self.mentor_source.fetch_mentors().await {
            Ok(list) => list,
            Err(e) => {
                error!("mentor fetch failed, showing an empty list: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch_remote_favorites(&self) -> FavoriteSet {
        if !self.config.is_authenticated() {
            debug!("no session token; favorites stay local");
            return FavoriteSet::new();
        }
        match self.favorites_store.fetch_favorite_ids().await {
            Ok(ids) => ids,
            Err(e) if e.is_auth() => {
                debug!("favorites fetch skipped: {e}");
                FavoriteSet::new()
            }
            Err(e) => {
                warn!("favorites fetch failed, using the local cache only: {e}");
                FavoriteSet::new()
            }
        }
    }

    /// Add or remove a favorite.
    ///
    /// The in-memory set and the cache are updated immediately. A newly
    /// added id is pushed to the server in the background; removals stay
    /// local because the store API only accepts additions. Must be called
    /// from within the runtime.
    pub fn toggle_favorite(&mut self, mentor_id: &str) {
        let next = favorites::toggle(mentor_id, &self.favorites);
        let added = next.len() > self.favorites.len();
        self.favorites = next;
        self.cache.write(&self.favorites);
        self.telemetry.report(TelemetryEvent::FavoriteToggled);

        if added && self.config.is_authenticated() {
            let store = Arc::clone(&self.favorites_store);
            let delta: FavoriteSet = [mentor_id.to_string()].into();
            let limit = self.config.push_retry_limit;
            tokio::spawn(async move {
                push_with_retry(store.as_ref(), &delta, limit).await;
            });
        }
    }

    /// Replace the filter criteria
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Current filter criteria
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The mentor list narrowed by the current criteria, original order
    /// preserved
    pub fn filtered_mentors(&self) -> Vec<&Mentor> {
        filter::select(&self.mentors, &self.criteria, &self.favorites)
    }

    /// Full mentor list as fetched
    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    /// The authoritative favorite set
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Whether the given mentor is favorited
    pub fn is_favorite(&self, mentor_id: &str) -> bool {
        self.favorites.contains(mentor_id)
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether startup has finished
    pub fn is_ready(&self) -> bool {
        self.phase == SessionPhase::Ready
    }

    /// Window title for the current filter selection
    pub fn window_title(&self) -> String {
        title::window_title(&self.criteria)
    }

    /// Maintenance notice for the shell to display, when one is configured
    pub fn maintenance_notice(&self) -> Option<&str> {
        self.config.maintenance_message.as_deref()
    }

    /// Report that the shell opened a modal dialog
    pub fn report_modal_opened(&self, title: &str) {
        self.telemetry.report(TelemetryEvent::ModalOpened {
            title: title.to_string(),
        });
    }
}

/// Push a favorites delta with bounded retry.
///
/// Failure never propagates: the final error is logged and the in-memory
/// set stays as merged. An auth error stops immediately, the session just
/// is not entitled to push.
async fn push_with_retry(store: &dyn FavoritesStore, delta: &FavoriteSet, limit: u32) {
    let attempts = limit.max(1);
    for attempt in 1..=attempts {
        match store.push_favorite_ids(delta).await {
            Ok(()) => {
                debug!(count = delta.len(), "favorites delta pushed");
                return;
            }
            Err(e) if e.is_auth() => {
                debug!("favorites push skipped: {e}");
                return;
            }
            Err(e) if attempt < attempts => {
                warn!(attempt, "favorites push failed, retrying: {e}");
                tokio::time::sleep(PUSH_RETRY_BACKOFF * attempt).await;
            }
            Err(e) => {
                error!("favorites push failed after {attempt} attempts: {e}");
            }
        }
    }
}
