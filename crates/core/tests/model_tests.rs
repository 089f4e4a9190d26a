// ═══════════════════════════════════════════════════════════════════
// Model Tests — Trip, TripStatus, ItineraryItem, booking types,
// session types, DemoPlayer state machine
// ═══════════════════════════════════════════════════════════════════

use trip_planner_core::models::booking::{
    BookingRequest, PaymentMethod, PaymentRequest, ITEM_TYPE_FULL_TRIP,
};
use trip_planner_core::models::demo::{DemoPlayer, STEP_COUNT, TICK_PERIOD};
use trip_planner_core::models::itinerary::ItineraryItem;
use trip_planner_core::models::session::{CachedPreferences, ClientSession};
use trip_planner_core::models::trip::{Trip, TripStatus};

// ═══════════════════════════════════════════════════════════════════
//  TripStatus
// ═══════════════════════════════════════════════════════════════════

mod trip_status {
    use super::*;

    #[test]
    fn display_lowercase() {
        assert_eq!(TripStatus::Planning.to_string(), "planning");
        assert_eq!(TripStatus::Booked.to_string(), "booked");
        assert_eq!(TripStatus::Completed.to_string(), "completed");
        assert_eq!(TripStatus::Unknown.to_string(), "unknown");
    }

    #[test]
    fn deserialize_known_values() {
        let status: TripStatus = serde_json::from_str("\"planning\"").unwrap();
        assert_eq!(status, TripStatus::Planning);
        let status: TripStatus = serde_json::from_str("\"booked\"").unwrap();
        assert_eq!(status, TripStatus::Booked);
        let status: TripStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, TripStatus::Completed);
    }

    #[test]
    fn unrecognized_value_maps_to_unknown() {
        let status: TripStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, TripStatus::Unknown);
        let status: TripStatus = serde_json::from_str("\"\"").unwrap();
        assert_eq!(status, TripStatus::Unknown);
    }

    #[test]
    fn is_planning_only_for_planning() {
        assert!(TripStatus::Planning.is_planning());
        assert!(!TripStatus::Booked.is_planning());
        assert!(!TripStatus::Completed.is_planning());
        assert!(!TripStatus::Unknown.is_planning());
    }

    #[test]
    fn serde_roundtrip() {
        for status in [
            TripStatus::Planning,
            TripStatus::Booked,
            TripStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: TripStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trip
// ═══════════════════════════════════════════════════════════════════

mod trip {
    use super::*;

    #[test]
    fn deserialize_server_response() {
        let json = r#"{
            "id": 12,
            "destination": "Tokyo, Japan",
            "duration": 5,
            "total_cost": 1280.5,
            "status": "planning",
            "created_at": "2025-06-01T09:30:00"
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, 12);
        assert_eq!(trip.destination, "Tokyo, Japan");
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.total_cost, 1280.5);
        assert_eq!(trip.status, TripStatus::Planning);
        assert!(trip.created_at.is_some());
    }

    #[test]
    fn deserialize_ignores_extra_fields() {
        // The generate endpoint appends AI extras the core doesn't consume.
        let json = r#"{
            "id": 3,
            "destination": "Paris",
            "duration": 3,
            "total_cost": 245,
            "status": "planning",
            "ai_insights": {"score": 94},
            "sustainability_score": 88
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, 3);
        assert_eq!(trip.created_at, None);
    }

    #[test]
    fn deserialize_missing_created_at_defaults_to_none() {
        let json = r#"{
            "id": 1,
            "destination": "Rome",
            "duration": 2,
            "total_cost": 100,
            "status": "booked"
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.created_at, None);
        assert_eq!(trip.status, TripStatus::Booked);
    }

    #[test]
    fn unknown_status_renders_without_error() {
        let json = r#"{
            "id": 9,
            "destination": "Lisbon",
            "duration": 2,
            "total_cost": 150,
            "status": "on_hold"
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.status, TripStatus::Unknown);
        assert_eq!(trip.status.to_string(), "unknown");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ItineraryItem
// ═══════════════════════════════════════════════════════════════════

mod itinerary_item {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let item = ItineraryItem {
            id: 2,
            day: 1,
            activity: "Colosseum Tour".to_string(),
            location: "Rome".to_string(),
            cost: 45.0,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: ItineraryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn deserialize_array() {
        let json = r#"[
            {"id": 1, "day": 2, "activity": "B", "location": "X", "cost": 10},
            {"id": 2, "day": 1, "activity": "A", "location": "Y", "cost": 20}
        ]"#;
        let items: Vec<ItineraryItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].day, 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Booking types
// ═══════════════════════════════════════════════════════════════════

mod booking {
    use super::*;

    #[test]
    fn full_trip_request_shape() {
        let request = BookingRequest::full_trip(42);
        assert_eq!(request.trip_id, 42);
        assert_eq!(request.item_type, ITEM_TYPE_FULL_TRIP);
        assert_eq!(request.item_id, "trip_42");
    }

    #[test]
    fn payment_method_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::DebitCard).unwrap(),
            "\"debit_card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Paypal).unwrap(),
            "\"paypal\""
        );
    }

    #[test]
    fn payment_method_display_matches_wire() {
        assert_eq!(PaymentMethod::CreditCard.to_string(), "credit_card");
        assert_eq!(PaymentMethod::Paypal.to_string(), "paypal");
    }

    #[test]
    fn payment_request_serializes_booking_reference() {
        let request = PaymentRequest {
            booking_id: 501,
            amount: 245.0,
            method: PaymentMethod::CreditCard,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["booking_id"], 501);
        assert_eq!(json["amount"], 245.0);
        assert_eq!(json["method"], "credit_card");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Session types
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn preferences_default() {
        let prefs = CachedPreferences::default();
        assert_eq!(prefs.destination, "Paris");
        assert_eq!(prefs.duration, 3);
    }

    #[test]
    fn session_default_is_anonymous() {
        let session = ClientSession::default();
        assert_eq!(session.auth_token, None);
        assert_eq!(session.preferences, CachedPreferences::default());
    }

    #[test]
    fn session_serde_roundtrip() {
        let session = ClientSession {
            auth_token: Some("tok-123".to_string()),
            preferences: CachedPreferences {
                destination: "Tokyo, Japan".to_string(),
                duration: 7,
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: ClientSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  DemoPlayer
// ═══════════════════════════════════════════════════════════════════

mod demo_player {
    use super::*;

    /// Ticks needed to bring step 3 (2000 ms) to exactly 100.0 progress:
    /// each tick adds 100 / (2000 / 100) = 5.0.
    const TICKS_TO_FULL: usize = 20;

    #[test]
    fn initial_state() {
        let player = DemoPlayer::new();
        assert_eq!(player.step(), 0);
        assert_eq!(player.progress(), 0.0);
        assert!(!player.is_playing());
        assert_eq!(player.steps().len(), STEP_COUNT);
    }

    #[test]
    fn tick_while_paused_is_noop() {
        let mut player = DemoPlayer::new();
        player.tick();
        player.tick();
        assert_eq!(player.step(), 0);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn tick_accumulates_progress() {
        let mut player = DemoPlayer::new();
        player.play();
        player.go_to(3); // 2000 ms step: exact 5.0 per tick
        player.tick();
        assert_eq!(player.progress(), 5.0);
        player.tick();
        assert_eq!(player.progress(), 10.0);
    }

    #[test]
    fn full_progress_advances_step_and_resets() {
        let mut player = DemoPlayer::new();
        player.play();
        player.go_to(3);
        for _ in 0..TICKS_TO_FULL {
            player.tick();
        }
        assert_eq!(player.progress(), 100.0);
        assert_eq!(player.step(), 3);

        // The tick that finds progress at 100 advances (3 + 1) % 4 = 0.
        player.tick();
        assert_eq!(player.step(), 0);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn scripted_tick_sequence_cycles_all_steps() {
        let mut player = DemoPlayer::new();
        player.play();
        player.go_to(3);

        // Run enough ticks to wrap past step 0 again: each step needs
        // duration/tick ticks to fill plus one to advance.
        let mut advances = 0;
        let mut last_step = player.step();
        for _ in 0..500 {
            player.tick();
            if player.step() != last_step {
                assert_eq!(player.step(), (last_step + 1) % STEP_COUNT);
                assert_eq!(player.progress(), 0.0);
                advances += 1;
                last_step = player.step();
            }
        }
        assert!(advances >= 2, "expected several step advances, got {advances}");
    }

    #[test]
    fn go_to_resets_progress_and_wraps() {
        let mut player = DemoPlayer::new();
        player.play();
        player.go_to(3);
        player.tick();
        assert!(player.progress() > 0.0);

        player.go_to(1);
        assert_eq!(player.step(), 1);
        assert_eq!(player.progress(), 0.0);

        player.go_to(5);
        assert_eq!(player.step(), 5 % STEP_COUNT);
    }

    #[test]
    fn toggle_flips_playback() {
        let mut player = DemoPlayer::new();
        assert!(player.toggle());
        assert!(player.is_playing());
        assert!(!player.toggle());
        assert!(!player.is_playing());
    }

    #[test]
    fn step_durations_match_script() {
        let player = DemoPlayer::new();
        let millis: Vec<u128> = player
            .steps()
            .iter()
            .map(|s| s.duration.as_millis())
            .collect();
        assert_eq!(millis, vec![3000, 2500, 3500, 2000]);
        assert_eq!(TICK_PERIOD.as_millis(), 100);
    }
}
