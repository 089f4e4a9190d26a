use serde::{Deserialize, Serialize};

/// One day-activity belonging to a trip.
///
/// Items are displayed ordered by `day` ascending; the store sorts them on
/// commit so readers never have to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: i64,

    /// 1-based day index, at most the owning trip's duration
    pub day: u32,

    pub activity: String,

    pub location: String,

    /// Cost of this activity, non-negative
    pub cost: f64,
}
