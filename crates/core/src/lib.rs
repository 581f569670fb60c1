//! Campus Core Library
//!
//! Domain core of the campus productivity client: account directory and
//! session, library seat and quiet cabin reservations, personal tasks, and
//! the slot-based persistence they all share. View rendering, routing, and
//! the static listings live in the UI shell, which drives these stores.

pub mod error;
pub mod invariants;
pub mod models;
pub mod storage;
pub mod stores;

pub use error::{Error, Result, StorageError};
pub use models::{
    Cabin, CabinBooking, Principal, SeatBooking, Task, TaskStatus, TimeSlot, UserRecord, CABINS,
    DEFAULT_SEAT_CAPACITY,
};
pub use storage::{load_slot, save_slot, Database, MemorySlots, SlotStore};
pub use stores::{AuthStore, BookingStore, NewTask, TaskStore, AUTH_SLOT, BOOKING_SLOT, TASK_SLOT};
