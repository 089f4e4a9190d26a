use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::booking::{BookingRequest, PaymentRequest};
use crate::models::session::UserProfile;
use crate::models::trip::Trip;

use super::wire::{
    AuthSession, BookingAck, ChatReply, GenerateRequest, ItineraryFetch, PaymentAck,
    RegisterRequest,
};

/// Trait abstraction over the remote trip service.
///
/// Covers the four resource groups the service exposes: authentication,
/// trip/itinerary, booking/payment, and AI insight/chat. The HTTP client
/// implements this trait; tests substitute mock transports, so the
/// orchestrator never knows whether a real network sits behind it.
#[async_trait]
pub trait TripService: Send + Sync {
    /// Attach (or clear) the bearer token used on subsequent requests.
    /// Without a token requests go out unauthenticated and the server
    /// decides rejection.
    fn set_bearer_token(&self, token: Option<String>);

    // ── Authentication ──────────────────────────────────────────────

    async fn login(&self, username: &str, password: &str) -> Result<AuthSession, CoreError>;

    async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, CoreError>;

    // ── Trip / itinerary ────────────────────────────────────────────

    /// Ask the service to generate a new trip with its itinerary.
    /// The response trip is normalized from either wire shape.
    async fn generate_itinerary(&self, request: &GenerateRequest) -> Result<Trip, CoreError>;

    /// All trips belonging to the authenticated user.
    async fn list_trips(&self) -> Result<Vec<Trip>, CoreError>;

    /// The itinerary of one trip, with the embedded trip when the service
    /// includes one.
    async fn trip_itinerary(&self, trip_id: i64) -> Result<ItineraryFetch, CoreError>;

    /// Request server-side regeneration of a trip's itinerary.
    async fn update_itinerary(&self, trip_id: i64) -> Result<(), CoreError>;

    // ── Booking / payment ───────────────────────────────────────────

    async fn book(&self, request: &BookingRequest) -> Result<BookingAck, CoreError>;

    async fn pay(&self, request: &PaymentRequest) -> Result<PaymentAck, CoreError>;

    // ── AI insight / chat ───────────────────────────────────────────

    /// Structured insight object for a trip, consumed opaquely.
    async fn ai_insights(&self, trip_id: i64) -> Result<serde_json::Value, CoreError>;

    async fn ai_chat(&self, message: &str) -> Result<ChatReply, CoreError>;
}
