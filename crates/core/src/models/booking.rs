//! Seat and cabin booking models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seats in the library pool per `(time slot, day)` pair
pub const DEFAULT_SEAT_CAPACITY: u32 = 50;

/// One of the three bookable day-parts.
///
/// The hour ranges are presentation metadata shown next to the label; the
/// stores never validate a booking against a wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
        }
    }

    /// Hour range displayed next to the slot label
    pub fn hours(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "9 AM – 12 PM",
            TimeSlot::Afternoon => "12 PM – 4 PM",
            TimeSlot::Evening => "4 PM – 8 PM",
        }
    }

    /// Wire form, matching the persisted snapshot strings
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fungible admission token for the library reading room.
///
/// No seat number: a booking grants entry for the slot, not a particular
/// chair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatBooking {
    pub id: String,
    pub user_id: String,
    pub time_slot: TimeSlot,
    pub date: String,
}

/// An exclusive hold on one cabin for one slot of one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinBooking {
    pub cabin_id: u32,
    pub user_id: String,
    pub time_slot: TimeSlot,
    pub date: String,
}

/// A quiet cabin in the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cabin {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

/// The cabin catalog. Fixed: there is no cabin administration in scope.
pub const CABINS: [Cabin; 3] = [
    Cabin {
        id: 1,
        name: "Cabin 1",
        description: "Quiet corner with natural light",
    },
    Cabin {
        id: 2,
        name: "Cabin 2",
        description: "Spacious room with whiteboard",
    },
    Cabin {
        id: 3,
        name: "Cabin 3",
        description: "Premium cabin with monitor",
    },
];
