use thiserror::Error;

/// Unified error type for the entire trip-planner-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}, HTTP {status}): {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Trip Lifecycle ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Trip not found: {0}")]
    TripNotFound(i64),

    #[error("An itinerary update is already running for trip {0}")]
    UpdateInFlight(i64),

    #[error("A booking attempt is already running for trip {0}")]
    BookingInFlight(i64),

    #[error("Trip {trip_id} cannot be booked: status is '{status}', expected 'planning'")]
    NotPlanning { trip_id: i64, status: String },

    #[error("Booking failed for trip {trip_id}: {message}")]
    Booking { trip_id: i64, message: String },

    /// The booking call succeeded but payment failed. The remote service now
    /// holds an unpaid booking and exposes no cancellation endpoint, so the
    /// trip is left inconsistent. Callers must surface this louder than a
    /// plain booking failure.
    #[error("Payment failed after booking {booking_id} was created for trip {trip_id}: {message}")]
    PaymentAfterBooking {
        trip_id: i64,
        booking_id: i64,
        message: String,
    },

    // ── Storage / File ──────────────────────────────────────────────
    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("Unsupported file version: {0}")]
    UnsupportedVersion(u16),

    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so bearer
        // tokens or credentials never end up in logs. reqwest errors often
        // contain full request URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
