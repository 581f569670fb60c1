//! Domain models for the campus core

mod booking;
mod task;
mod user;

pub use booking::{Cabin, CabinBooking, SeatBooking, TimeSlot, CABINS, DEFAULT_SEAT_CAPACITY};
pub use task::{Task, TaskStatus};
pub use user::{Principal, UserRecord};
