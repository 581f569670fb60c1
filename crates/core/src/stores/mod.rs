//! Aggregate stores
//!
//! Each store owns one durable slot, loads its whole aggregate on
//! construction, validates mutations in memory, and rewrites the snapshot
//! after every successful mutation. Domain failures come back as values;
//! storage faults never cross the store boundary.

mod auth;
mod booking;
mod task;

pub use auth::{AuthStore, AUTH_SLOT};
pub use booking::{BookingStore, BOOKING_SLOT};
pub use task::{NewTask, TaskStore, TASK_SLOT};
