//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible aggregate states during
//! development. These checks are compiled out in release builds.

use std::collections::{HashMap, HashSet};

use crate::models::{CabinBooking, Principal, SeatBooking, TimeSlot, UserRecord};

/// Validate that the user directory is internally consistent
pub fn assert_directory_invariants(users: &[UserRecord], session: Option<&Principal>) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut seen = HashSet::new();
    for user in users {
        let fresh = seen.insert(user.email.as_str());
        debug_assert!(fresh, "Duplicate directory entry for {}", user.email);
    }

    if let Some(principal) = session {
        debug_assert!(
            principal.id == principal.email,
            "Session principal {} has id {} instead of its email",
            principal.email,
            principal.id
        );
        debug_assert!(
            users.iter().any(|u| u.email == principal.email),
            "Session principal {} has no directory record",
            principal.email
        );
    }
}

/// Validate that booking state respects seat capacity and cabin exclusivity
pub fn assert_booking_invariants(
    seat_capacity: u32,
    seat_bookings: &[SeatBooking],
    cabin_bookings: &[CabinBooking],
) {
    if !cfg!(debug_assertions) {
        return;
    }

    let mut occupancy: HashMap<(TimeSlot, &str), u32> = HashMap::new();
    for booking in seat_bookings {
        *occupancy
            .entry((booking.time_slot, booking.date.as_str()))
            .or_default() += 1;
    }
    for ((slot, date), count) in &occupancy {
        debug_assert!(
            *count <= seat_capacity,
            "Slot {} on {} holds {} bookings, capacity is {}",
            slot,
            date,
            count,
            seat_capacity
        );
    }

    let mut holds = HashSet::new();
    for booking in cabin_bookings {
        let fresh = holds.insert((booking.cabin_id, booking.time_slot, booking.date.as_str()));
        debug_assert!(
            fresh,
            "Cabin {} double-booked for {} on {}",
            booking.cabin_id, booking.time_slot, booking.date
        );
    }
}
