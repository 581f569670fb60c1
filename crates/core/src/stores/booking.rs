//! Seat and cabin reservation store

use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::{CabinBooking, SeatBooking, TimeSlot, DEFAULT_SEAT_CAPACITY};
use crate::storage::{load_slot, save_slot, SlotStore};

/// Durable slot name; must stay bit-exact to read existing deployments
pub const BOOKING_SLOT: &str = "campus-booking-storage";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingState {
    total_seats: u32,
    seat_bookings: Vec<SeatBooking>,
    cabin_bookings: Vec<CabinBooking>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            total_seats: DEFAULT_SEAT_CAPACITY,
            seat_bookings: Vec::new(),
            cabin_bookings: Vec::new(),
        }
    }
}

/// Library seat and quiet cabin reservations.
///
/// Seats are a fungible pool capped per `(time slot, day)`; cabins are held
/// exclusively per `(cabin, time slot, day)`. Bookings accumulate
/// monotonically — there is no release operation, so a slot drains until the
/// underlying storage is cleared.
pub struct BookingStore<'a> {
    slots: &'a dyn SlotStore,
    state: BookingState,
}

impl<'a> BookingStore<'a> {
    /// Construct from the durable slot, falling back to an empty book with
    /// the default seat pool
    pub fn new(slots: &'a dyn SlotStore) -> Self {
        let state = load_slot(slots, BOOKING_SLOT).unwrap_or_default();
        Self { slots, state }
    }

    /// Construct with a non-default seat pool size. Overrides whatever the
    /// snapshot carried; intended for small test fixtures.
    pub fn with_seat_capacity(slots: &'a dyn SlotStore, capacity: u32) -> Self {
        let mut store = Self::new(slots);
        store.state.total_seats = capacity;
        store
    }

    /// Seat pool size per `(time slot, day)`
    pub fn seat_capacity(&self) -> u32 {
        self.state.total_seats
    }

    /// Book one fungible seat.
    ///
    /// Returns [`Error::Full`] once the pool for the slot and day is
    /// exhausted, leaving state untouched. A user may hold several seats for
    /// the same slot and day; only the total head count is capped.
    #[instrument(skip(self))]
    pub fn book_seat(&mut self, user_id: &str, time_slot: TimeSlot, date: &str) -> Result<SeatBooking> {
        if self.booked_seats(time_slot, date) >= self.state.total_seats {
            return Err(Error::Full);
        }

        let booking = SeatBooking {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            time_slot,
            date: date.to_string(),
        };
        self.state.seat_bookings.push(booking.clone());
        self.check_invariants();
        self.persist();
        Ok(booking)
    }

    /// Seats still free for a slot and day.
    ///
    /// Saturates at zero: a snapshot written under a larger pool can carry
    /// more bookings than the current capacity.
    pub fn available_seats(&self, time_slot: TimeSlot, date: &str) -> u32 {
        self.state
            .total_seats
            .saturating_sub(self.booked_seats(time_slot, date))
    }

    /// Seats already taken for a slot and day
    pub fn booked_seats(&self, time_slot: TimeSlot, date: &str) -> u32 {
        self.state
            .seat_bookings
            .iter()
            .filter(|b| b.time_slot == time_slot && b.date == date)
            .count() as u32
    }

    /// All seat bookings held by a user, oldest first
    pub fn user_seat_bookings(&self, user_id: &str) -> Vec<&SeatBooking> {
        self.state
            .seat_bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .collect()
    }

    /// Place an exclusive hold on a cabin.
    ///
    /// Returns [`Error::Taken`] when any hold exists for the same
    /// `(cabin, time slot, day)`, regardless of holder.
    #[instrument(skip(self))]
    pub fn book_cabin(
        &mut self,
        cabin_id: u32,
        user_id: &str,
        time_slot: TimeSlot,
        date: &str,
    ) -> Result<CabinBooking> {
        if !self.is_cabin_available(cabin_id, time_slot, date) {
            return Err(Error::Taken);
        }

        let booking = CabinBooking {
            cabin_id,
            user_id: user_id.to_string(),
            time_slot,
            date: date.to_string(),
        };
        self.state.cabin_bookings.push(booking.clone());
        self.check_invariants();
        self.persist();
        Ok(booking)
    }

    /// Whether no hold exists for `(cabin, time slot, day)`
    pub fn is_cabin_available(&self, cabin_id: u32, time_slot: TimeSlot, date: &str) -> bool {
        !self
            .state
            .cabin_bookings
            .iter()
            .any(|b| b.cabin_id == cabin_id && b.time_slot == time_slot && b.date == date)
    }

    /// All cabin holds for a user, oldest first
    pub fn user_cabin_bookings(&self, user_id: &str) -> Vec<&CabinBooking> {
        self.state
            .cabin_bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .collect()
    }

    fn check_invariants(&self) {
        invariants::assert_booking_invariants(
            self.state.total_seats,
            &self.state.seat_bookings,
            &self.state.cabin_bookings,
        );
    }

    fn persist(&self) {
        save_slot(self.slots, BOOKING_SLOT, &self.state);
    }
}
