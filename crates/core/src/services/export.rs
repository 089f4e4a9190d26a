use crate::models::itinerary::ItineraryItem;
use crate::models::trip::Trip;

/// A rendered itinerary report, ready for the frontend to hand to the user
/// as a downloadable text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripReport {
    pub filename: String,
    pub content: String,
}

/// Formats the current trip view into a flat text report.
///
/// Pure and synchronous: same input, byte-identical output, no failure
/// modes. One line per itinerary item, ordered by day, preceded by the
/// destination/duration/total-cost header.
pub struct SnapshotExporter;

impl SnapshotExporter {
    /// Render the report for a trip and its itinerary.
    #[must_use]
    pub fn render(trip: &Trip, itinerary: &[ItineraryItem]) -> TripReport {
        let mut items: Vec<&ItineraryItem> = itinerary.iter().collect();
        items.sort_by_key(|item| item.day);

        let mut content = String::new();
        content.push_str(&format!("Trip to {}\n", trip.destination));
        content.push_str(&format!("Duration: {} days\n", trip.duration));
        content.push_str(&format!("Total Cost: ${}\n", trip.total_cost));
        content.push('\n');
        content.push_str("Itinerary:\n");
        for item in items {
            content.push_str(&format!(
                "Day {}: {} at {} - ${}\n",
                item.day, item.activity, item.location, item.cost
            ));
        }

        TripReport {
            filename: format!("{}-itinerary.txt", trip.destination),
            content,
        }
    }
}
