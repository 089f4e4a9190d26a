use serde::{Deserialize, Serialize};

/// Item type sent when booking a whole trip in one transaction.
pub const ITEM_TYPE_FULL_TRIP: &str = "full_trip";

/// Payment method accepted by the payment endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::DebitCard => write!(f, "debit_card"),
            PaymentMethod::Paypal => write!(f, "paypal"),
        }
    }
}

/// Body of a booking request (`POST /book`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub trip_id: i64,
    pub item_type: String,
    pub item_id: String,
}

impl BookingRequest {
    /// Build the request the orchestrator uses: book the whole trip.
    #[must_use]
    pub fn full_trip(trip_id: i64) -> Self {
        Self {
            trip_id,
            item_type: ITEM_TYPE_FULL_TRIP.to_string(),
            item_id: format!("trip_{trip_id}"),
        }
    }
}

/// Body of a payment request (`POST /payment`). Must reference the
/// `booking_id` returned by the preceding booking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub booking_id: i64,
    pub amount: f64,
    pub method: PaymentMethod,
}
