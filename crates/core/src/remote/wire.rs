//! Wire-level request/response bodies for the remote trip service.
//!
//! Several endpoints return duck-typed shapes (a trip may be nested or
//! top-level, an itinerary may come wrapped or as a bare array). Those are
//! modeled as untagged envelopes here and normalized immediately after
//! deserialization; nothing past this module ever sees the raw shapes.

use serde::{Deserialize, Serialize};

use crate::models::itinerary::ItineraryItem;
use crate::models::session::UserProfile;
use crate::models::trip::Trip;

// ── Auth ────────────────────────────────────────────────────────────

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// Free-form preference object, interpreted server-side
    #[serde(default)]
    pub preferences: serde_json::Value,

    #[serde(default = "default_budget")]
    pub budget: f64,
}

fn default_budget() -> f64 {
    1000.0
}

impl RegisterRequest {
    /// New registration with empty preferences and the service's default
    /// budget.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            preferences: serde_json::Value::Object(serde_json::Map::new()),
            budget: default_budget(),
        }
    }
}

/// Successful login response: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

// ── Itinerary generation ────────────────────────────────────────────

/// Body of `POST /itinerary/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub destination: String,
    pub duration: u32,
}

/// The generate endpoint answers with either a top-level trip object or a
/// `{"trip": {...}}` wrapper, depending on the service version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerateEnvelope {
    Nested { trip: Trip },
    Flat(Trip),
}

impl GenerateEnvelope {
    /// Normalize both shapes into the trip itself.
    #[must_use]
    pub fn into_trip(self) -> Trip {
        match self {
            GenerateEnvelope::Nested { trip } | GenerateEnvelope::Flat(trip) => trip,
        }
    }
}

// ── Itinerary fetch ─────────────────────────────────────────────────

/// `GET /trips/{id}/itinerary` answers with `{trip?, itinerary}` or with a
/// bare item array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItineraryEnvelope {
    Detailed {
        #[serde(default)]
        trip: Option<Trip>,
        itinerary: Vec<ItineraryItem>,
    },
    Bare(Vec<ItineraryItem>),
}

/// Normalized itinerary response: the items, plus the embedded trip when
/// the service included one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryFetch {
    pub trip: Option<Trip>,
    pub items: Vec<ItineraryItem>,
}

impl ItineraryEnvelope {
    #[must_use]
    pub fn normalize(self) -> ItineraryFetch {
        match self {
            ItineraryEnvelope::Detailed { trip, itinerary } => ItineraryFetch {
                trip,
                items: itinerary,
            },
            ItineraryEnvelope::Bare(items) => ItineraryFetch { trip: None, items },
        }
    }
}

// ── Booking / payment ───────────────────────────────────────────────

/// Response of `POST /book`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingAck {
    pub booking_id: i64,

    #[serde(default)]
    pub message: String,
}

/// Response of `POST /payment`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaymentAck {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: String,
}

// ── AI assistant ────────────────────────────────────────────────────

/// Body of `POST /hackathon/ai/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Chat assistant reply. Extra fields the service sends (conversation id,
/// response time) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub response: String,

    #[serde(default)]
    pub suggestions: Vec<String>,

    #[serde(default)]
    pub ai_confidence: f64,
}
