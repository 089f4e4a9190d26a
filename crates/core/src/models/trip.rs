use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a trip, as reported by the remote service.
///
/// The service owns the transitions; the client only ever drives
/// `Planning → Booked` through a successful two-phase booking. Any wire
/// value we don't recognize lands in `Unknown` so a server-side addition
/// never breaks deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Created but not yet booked; the only state booking is allowed from
    Planning,
    /// Booking and payment both completed
    Booked,
    /// Trip finished (transition happens server-side)
    Completed,
    /// Any status string this client version doesn't know about
    #[serde(other)]
    Unknown,
}

impl TripStatus {
    /// `true` only for `Planning`, the sole state booking may start from.
    #[must_use]
    pub fn is_planning(&self) -> bool {
        matches!(self, TripStatus::Planning)
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripStatus::Planning => write!(f, "planning"),
            TripStatus::Booked => write!(f, "booked"),
            TripStatus::Completed => write!(f, "completed"),
            TripStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single planned journey.
///
/// `total_cost` is computed by the remote service independently of the
/// itinerary items; the sum of item costs is informative only and is never
/// reconciled against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Remote-assigned identifier (locally synthesized trips reuse the
    /// requested id)
    pub id: i64,

    /// Destination name, non-empty
    pub destination: String,

    /// Trip length in days, positive
    pub duration: u32,

    /// Total cost in the service's display currency
    pub total_cost: f64,

    pub status: TripStatus,

    /// Server-side creation timestamp; absent on synthesized trips
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
