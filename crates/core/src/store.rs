use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::errors::CoreError;
use crate::models::itinerary::ItineraryItem;
use crate::models::trip::Trip;

/// Where the displayed trip data came from.
///
/// The UI renders both origins identically; the distinction exists so logs
/// and tests can tell real data from the local fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripOrigin {
    /// Returned by the remote service
    Fetched,
    /// Produced locally by the fallback synthesizer
    Synthesized,
}

/// The trip and its itinerary as one unit. The store only ever exposes the
/// pair together, never one half of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripView {
    pub trip: Trip,
    pub itinerary: Vec<ItineraryItem>,
    pub origin: TripOrigin,
}

/// In-flight operation flags. The UI uses them to disable affordances; the
/// orchestrator uses `updating`/`booking` for its single-flight checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub loading: bool,
    pub updating: bool,
    pub booking: bool,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Id of the trip the view currently belongs to. Late responses for any
    /// other id are discarded at commit time.
    current_trip_id: Option<i64>,
    view: Option<TripView>,
    flags: BusyFlags,
}

/// Per-view state for one trip's lifecycle.
///
/// Single source of truth for the rendering layer. The mutex guards short
/// critical sections only and is never held across an await point; readers
/// get cloned snapshots so a trip without its matching itinerary can never
/// be observed.
#[derive(Debug, Default)]
pub struct TripStore {
    inner: Mutex<StoreInner>,
}

impl TripStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consistent snapshot of the current view, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<TripView> {
        self.lock().view.clone()
    }

    #[must_use]
    pub fn flags(&self) -> BusyFlags {
        self.lock().flags
    }

    #[must_use]
    pub fn current_trip_id(&self) -> Option<i64> {
        self.lock().current_trip_id
    }

    /// Mark a load as started and make `trip_id` the current view identity.
    /// A previously displayed trip stays visible until the new data commits.
    pub fn begin_load(&self, trip_id: i64) {
        let mut inner = self.lock();
        inner.current_trip_id = Some(trip_id);
        inner.flags.loading = true;
    }

    pub fn finish_load(&self) {
        self.lock().flags.loading = false;
    }

    /// Write the trip/itinerary pair atomically, but only if `trip_id` is
    /// still the current view identity. Returns whether the write applied;
    /// a stale response for a previously viewed trip is dropped.
    pub fn commit(&self, trip_id: i64, mut view: TripView) -> bool {
        let mut inner = self.lock();
        if inner.current_trip_id != Some(trip_id) {
            return false;
        }
        view.itinerary.sort_by_key(|item| item.day);
        inner.view = Some(view);
        true
    }

    /// Claim the single update slot. Fails if an itinerary update is
    /// already in flight.
    pub fn try_begin_update(&self, trip_id: i64) -> Result<(), CoreError> {
        let mut inner = self.lock();
        if inner.flags.updating {
            return Err(CoreError::UpdateInFlight(trip_id));
        }
        inner.flags.updating = true;
        Ok(())
    }

    pub fn finish_update(&self) {
        self.lock().flags.updating = false;
    }

    /// Claim the single booking slot. Fails if a booking attempt is
    /// already in flight.
    pub fn try_begin_booking(&self, trip_id: i64) -> Result<(), CoreError> {
        let mut inner = self.lock();
        if inner.flags.booking {
            return Err(CoreError::BookingInFlight(trip_id));
        }
        inner.flags.booking = true;
        Ok(())
    }

    pub fn finish_booking(&self) {
        self.lock().flags.booking = false;
    }

    /// View teardown: forget the current trip, its view, and all flags.
    /// In-flight results for the old trip will fail the commit check.
    pub fn clear(&self) {
        *self.lock() = StoreInner::default();
    }
}
