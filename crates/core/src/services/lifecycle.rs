use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::errors::CoreError;
use crate::models::booking::{BookingRequest, PaymentMethod, PaymentRequest};
use crate::models::session::CachedPreferences;
use crate::remote::traits::TripService;
use crate::store::{TripOrigin, TripStore, TripView};

use super::fallback::FallbackSynthesizer;

/// Sequences the trip lifecycle: fetch, reconcile, regenerate, and the
/// two-phase booking-then-payment transaction.
///
/// Operates on a caller-owned [`TripStore`] passed into every operation;
/// holds no trip state of its own. Ordering and mutual exclusion are
/// enforced through the store's flag protocol.
pub struct LifecycleService {
    service: Arc<dyn TripService>,
}

impl LifecycleService {
    pub fn new(service: Arc<dyn TripService>) -> Self {
        Self { service }
    }

    /// Load a trip and its itinerary into the store.
    ///
    /// The trip list and the itinerary are fetched concurrently and joined;
    /// the trip is picked from the list by id, or taken from the itinerary
    /// response when the list omits it (the two endpoints may disagree on
    /// shape). On any remote failure the fallback synthesizer steps in, so
    /// apart from id validation this operation always yields a view. The
    /// degradation is deliberate demo-continuity policy and is logged.
    ///
    /// A result arriving after the store moved on to a different trip id is
    /// discarded (stale-response guard).
    pub async fn load_trip(
        &self,
        store: &TripStore,
        trip_id: i64,
        preferences: &CachedPreferences,
    ) -> Result<TripView, CoreError> {
        if trip_id <= 0 {
            return Err(CoreError::Validation(format!(
                "trip id must be positive, got {trip_id}"
            )));
        }

        store.begin_load(trip_id);
        let view = match self.fetch_view(trip_id).await {
            Ok(view) => view,
            Err(e) => {
                warn!(trip_id, error = %e, "remote trip fetch failed; serving synthesized fallback");
                let (trip, itinerary) = FallbackSynthesizer::synthesize(trip_id, preferences);
                TripView {
                    trip,
                    itinerary,
                    origin: TripOrigin::Synthesized,
                }
            }
        };
        let applied = store.commit(trip_id, view.clone());
        store.finish_load();
        if !applied {
            debug!(trip_id, "discarding stale load result, another trip is displayed now");
        }
        Ok(view)
    }

    /// Ask the service to regenerate the itinerary, then reload the trip.
    ///
    /// Single-flight per store: a second refresh while one is running is
    /// rejected with [`CoreError::UpdateInFlight`]. Unlike the initial load
    /// there is no fallback on failure; the store keeps its previous
    /// contents and the error reaches the caller.
    pub async fn refresh_itinerary(
        &self,
        store: &TripStore,
        trip_id: i64,
        preferences: &CachedPreferences,
    ) -> Result<TripView, CoreError> {
        if trip_id <= 0 {
            return Err(CoreError::Validation(format!(
                "trip id must be positive, got {trip_id}"
            )));
        }

        store.try_begin_update(trip_id)?;
        let outcome = match self.service.update_itinerary(trip_id).await {
            Ok(()) => {
                info!(trip_id, "itinerary regenerated, reloading trip");
                self.load_trip(store, trip_id, preferences).await
            }
            Err(e) => {
                warn!(trip_id, error = %e, "itinerary update failed, store left unchanged");
                Err(e)
            }
        };
        store.finish_update();
        outcome
    }

    /// Two-phase booking: create the booking, then pay for it, then reload
    /// the trip to pick up the server's updated status.
    ///
    /// Preconditions (caller errors, no network call is made): the trip must
    /// be the currently displayed one and its status must be `planning`.
    /// Single-flight per store via [`CoreError::BookingInFlight`].
    ///
    /// A failure in phase one leaves everything unchanged. A failure in
    /// phase two leaves an unpaid booking on the remote side with no way to
    /// compensate (the service has no cancellation endpoint); that case is
    /// reported as the distinct [`CoreError::PaymentAfterBooking`].
    pub async fn book_trip(
        &self,
        store: &TripStore,
        trip_id: i64,
        total_cost: f64,
        preferences: &CachedPreferences,
    ) -> Result<i64, CoreError> {
        if trip_id <= 0 {
            return Err(CoreError::Validation(format!(
                "trip id must be positive, got {trip_id}"
            )));
        }
        if !total_cost.is_finite() || total_cost < 0.0 {
            return Err(CoreError::Validation(format!(
                "total cost must be finite and non-negative, got {total_cost}"
            )));
        }

        match store.snapshot() {
            Some(view) if view.trip.id == trip_id => {
                if !view.trip.status.is_planning() {
                    return Err(CoreError::NotPlanning {
                        trip_id,
                        status: view.trip.status.to_string(),
                    });
                }
            }
            _ => {
                return Err(CoreError::Validation(format!(
                    "trip {trip_id} is not the currently displayed trip"
                )));
            }
        }

        store.try_begin_booking(trip_id)?;
        let outcome = self.run_booking(trip_id, total_cost).await;
        if let Ok(booking_id) = &outcome {
            info!(trip_id, booking_id, "booking and payment completed, reloading trip");
            // Reload cannot fail: the id was validated above and load_trip
            // falls back internally on remote failure.
            let _ = self.load_trip(store, trip_id, preferences).await;
        }
        store.finish_booking();
        outcome
    }

    async fn fetch_view(&self, trip_id: i64) -> Result<TripView, CoreError> {
        // Two independent requests, joined: both must settle before the
        // pair is committed.
        let (trips, itinerary) = tokio::join!(
            self.service.list_trips(),
            self.service.trip_itinerary(trip_id)
        );
        let trips = trips?;
        let fetch = itinerary?;

        let trip = trips
            .into_iter()
            .find(|t| t.id == trip_id)
            .or(fetch.trip)
            .ok_or(CoreError::TripNotFound(trip_id))?;

        Ok(TripView {
            trip,
            itinerary: fetch.items,
            origin: TripOrigin::Fetched,
        })
    }

    async fn run_booking(&self, trip_id: i64, total_cost: f64) -> Result<i64, CoreError> {
        let booking = self
            .service
            .book(&BookingRequest::full_trip(trip_id))
            .await
            .map_err(|e| CoreError::Booking {
                trip_id,
                message: e.to_string(),
            })?;

        info!(trip_id, booking_id = booking.booking_id, "booking created, processing payment");

        let payment = PaymentRequest {
            booking_id: booking.booking_id,
            amount: total_cost,
            method: PaymentMethod::CreditCard,
        };
        self.service.pay(&payment).await.map_err(|e| {
            error!(
                trip_id,
                booking_id = booking.booking_id,
                error = %e,
                "payment failed after booking was created; remote booking is unpaid and cannot be cancelled"
            );
            CoreError::PaymentAfterBooking {
                trip_id,
                booking_id: booking.booking_id,
                message: e.to_string(),
            }
        })?;

        Ok(booking.booking_id)
    }
}
