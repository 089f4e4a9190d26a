pub mod errors;
pub mod models;
pub mod observability;
pub mod remote;
pub mod services;
pub mod storage;
pub mod store;

use std::sync::Arc;

use models::session::{CachedPreferences, ClientSession, UserProfile};
use models::trip::Trip;
use remote::http::HttpTripService;
use remote::traits::TripService;
use remote::wire::{ChatReply, GenerateRequest, RegisterRequest};
use services::export::{SnapshotExporter, TripReport};
use services::lifecycle::LifecycleService;
use storage::manager::StorageManager;
use store::{BusyFlags, TripStore, TripView};

use errors::CoreError;

/// Main entry point for the Trip Planner core library.
///
/// Owns the per-view trip state, the lifecycle orchestrator, the remote
/// service handle, and the durable client session. The rendering layer
/// calls in here and re-renders from whatever [`TripStore`] snapshot it
/// gets back.
#[must_use]
pub struct TripPlanner {
    session: ClientSession,
    service: Arc<dyn TripService>,
    lifecycle: LifecycleService,
    store: TripStore,
    /// Tracks whether the session changed since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for TripPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TripPlanner")
            .field("authenticated", &self.session.auth_token.is_some())
            .field("preferences", &self.session.preferences)
            .field("current_trip", &self.store.current_trip_id())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl TripPlanner {
    /// Fresh planner with a default (anonymous) session.
    pub fn new(service: Arc<dyn TripService>) -> Self {
        Self::build(service, ClientSession::default())
    }

    /// Fresh planner talking HTTP to the service at `base_url`.
    pub fn with_http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTripService::new(base_url)))
    }

    /// Planner restored from a previously saved session. The stored bearer
    /// token, if any, is attached to the service immediately.
    pub fn restore(service: Arc<dyn TripService>, session: ClientSession) -> Self {
        Self::build(service, session)
    }

    /// Restore from raw session-file bytes.
    /// Use this where the frontend handles file I/O itself.
    pub fn load_from_bytes(service: Arc<dyn TripService>, data: &[u8]) -> Result<Self, CoreError> {
        let session = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(service, session))
    }

    /// Save the current session to raw bytes the frontend can persist.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.session)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Restore from a session file on disk.
    pub fn load_from_file(service: Arc<dyn TripService>, path: &str) -> Result<Self, CoreError> {
        let session = StorageManager::load_from_file(path)?;
        Ok(Self::build(service, session))
    }

    /// Save the session to a file on disk.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_file(&mut self, path: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.session, path)?;
        self.dirty = false;
        Ok(())
    }

    // ── Authentication ──────────────────────────────────────────────

    /// Log in and keep the bearer token for subsequent requests.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<UserProfile, CoreError> {
        let auth = self.service.login(username, password).await?;
        self.service.set_bearer_token(Some(auth.access_token.clone()));
        self.session.auth_token = Some(auth.access_token);
        self.dirty = true;
        Ok(auth.user)
    }

    /// Register a new user. Does not log in; call [`TripPlanner::login`]
    /// afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, CoreError> {
        self.service.register(request).await
    }

    /// Drop the stored bearer token; subsequent requests go out
    /// unauthenticated.
    pub fn logout(&mut self) {
        if self.session.auth_token.take().is_some() {
            self.service.set_bearer_token(None);
            self.dirty = true;
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.auth_token.is_some()
    }

    // ── Planning ────────────────────────────────────────────────────

    /// Submit the planning form: remember the input for the fallback
    /// synthesizer, then ask the service to generate the trip.
    ///
    /// The preferences are cached before the request goes out, so even a
    /// failed generation improves later fallbacks.
    pub async fn plan_trip(&mut self, destination: &str, duration: u32) -> Result<Trip, CoreError> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(CoreError::Validation("destination must not be empty".into()));
        }
        if duration == 0 {
            return Err(CoreError::Validation("duration must be at least 1 day".into()));
        }

        self.session.preferences = CachedPreferences {
            destination: destination.to_string(),
            duration,
        };
        self.dirty = true;

        let request = GenerateRequest {
            destination: destination.to_string(),
            duration,
        };
        self.service.generate_itinerary(&request).await
    }

    /// Last planning-form input (what the fallback synthesizer would use).
    #[must_use]
    pub fn preferences(&self) -> &CachedPreferences {
        &self.session.preferences
    }

    // ── Trip Lifecycle ──────────────────────────────────────────────

    /// Load a trip into the store. Always yields a view for a valid id:
    /// fetched from the service, or synthesized locally when the fetch
    /// path fails.
    pub async fn load_trip(&self, trip_id: i64) -> Result<TripView, CoreError> {
        self.lifecycle
            .load_trip(&self.store, trip_id, &self.session.preferences)
            .await
    }

    /// Regenerate the itinerary and reload. Single-flight per trip;
    /// failures keep the store unchanged and reach the caller.
    pub async fn refresh_itinerary(&self, trip_id: i64) -> Result<TripView, CoreError> {
        self.lifecycle
            .refresh_itinerary(&self.store, trip_id, &self.session.preferences)
            .await
    }

    /// Book the displayed trip and pay for it (two-phase). Returns the
    /// booking id. See [`LifecycleService::book_trip`] for the failure
    /// modes, in particular [`CoreError::PaymentAfterBooking`].
    pub async fn book_trip(&self, trip_id: i64, total_cost: f64) -> Result<i64, CoreError> {
        self.lifecycle
            .book_trip(&self.store, trip_id, total_cost, &self.session.preferences)
            .await
    }

    /// Consistent snapshot of the displayed trip and its itinerary.
    #[must_use]
    pub fn view_trip(&self) -> Option<TripView> {
        self.store.snapshot()
    }

    /// In-flight operation flags, for gating UI affordances.
    #[must_use]
    pub fn busy_flags(&self) -> BusyFlags {
        self.store.flags()
    }

    /// Tear down the trip view. Late results for the old trip are dropped.
    pub fn close_trip(&self) {
        self.store.clear();
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Render the displayed trip as a plain-text report, or `None` when no
    /// trip is loaded. Same snapshot in, byte-identical report out.
    #[must_use]
    pub fn export_snapshot(&self) -> Option<TripReport> {
        let view = self.store.snapshot()?;
        Some(SnapshotExporter::render(&view.trip, &view.itinerary))
    }

    // ── AI Assistant ────────────────────────────────────────────────

    /// Structured insight object for a trip, passed through opaquely.
    pub async fn ai_insights(&self, trip_id: i64) -> Result<serde_json::Value, CoreError> {
        self.service.ai_insights(trip_id).await
    }

    /// One chat round with the travel assistant.
    pub async fn ai_chat(&self, message: &str) -> Result<ChatReply, CoreError> {
        self.service.ai_chat(message).await
    }

    // ── Session / Dirty State ───────────────────────────────────────

    /// Returns `true` if the session changed since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(service: Arc<dyn TripService>, session: ClientSession) -> Self {
        service.set_bearer_token(session.auth_token.clone());
        let lifecycle = LifecycleService::new(Arc::clone(&service));
        Self {
            session,
            service,
            lifecycle,
            store: TripStore::new(),
            dirty: false,
        }
    }
}
