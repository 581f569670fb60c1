//! End-to-end scenarios driven against on-disk storage
//!
//! Exercises the three stores together the way the UI shell does, including
//! reconstruction from the database after a simulated process restart.

use campus_core::{
    AuthStore, BookingStore, Database, Error, NewTask, TaskStore, TimeSlot,
};

fn open_db(dir: &tempfile::TempDir) -> Database {
    Database::open(dir.path().join("campus.db")).unwrap()
}

#[test]
fn test_signup_book_and_plan_flow() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir);

    let mut auth = AuthStore::new(&db);
    let ada = auth.register("Ada", "ada@campus.edu", "p1").unwrap();
    assert_eq!(auth.register("Bob", "ada@campus.edu", "p2"), Err(Error::DuplicateEmail));

    let mut bookings = BookingStore::new(&db);
    bookings.book_seat(&ada.id, TimeSlot::Morning, "2025-01-15").unwrap();
    bookings.book_cabin(1, &ada.id, TimeSlot::Evening, "2025-02-01").unwrap();

    let mut tasks = TaskStore::new(&db);
    let essay = tasks
        .add_task(NewTask {
            user_id: &ada.id,
            title: "Essay",
            description: "",
            date: "2025-03-01",
            time: "09:00",
        })
        .unwrap();

    assert_eq!(bookings.user_seat_bookings(&ada.id).len(), 1);
    assert_eq!(tasks.overdue_tasks(&ada.id, "2025-03-02"), vec![&essay]);
}

#[test]
fn test_capacity_and_exclusivity_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir);
    let mut bookings = BookingStore::with_seat_capacity(&db, 2);

    // The capacity-th booking succeeds; the next is rejected.
    bookings.book_seat("u1", TimeSlot::Morning, "2025-01-15").unwrap();
    bookings.book_seat("u2", TimeSlot::Morning, "2025-01-15").unwrap();
    assert_eq!(
        bookings.book_seat("u3", TimeSlot::Morning, "2025-01-15"),
        Err(Error::Full)
    );
    assert_eq!(bookings.available_seats(TimeSlot::Morning, "2025-01-15"), 0);
    assert_eq!(bookings.available_seats(TimeSlot::Afternoon, "2025-01-15"), 2);

    // Cabin conflicts apply across users.
    bookings.book_cabin(1, "u1", TimeSlot::Evening, "2025-02-01").unwrap();
    assert_eq!(
        bookings.book_cabin(1, "u2", TimeSlot::Evening, "2025-02-01"),
        Err(Error::Taken)
    );
    bookings.book_cabin(2, "u2", TimeSlot::Evening, "2025-02-01").unwrap();
    assert!(!bookings.is_cabin_available(1, TimeSlot::Evening, "2025-02-01"));
    assert!(bookings.is_cabin_available(1, TimeSlot::Morning, "2025-02-01"));
}

#[test]
fn test_persistence_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campus.db");

    let essay = {
        let db = Database::open(&path).unwrap();

        let mut auth = AuthStore::new(&db);
        let ada = auth.register("Ada", "ada@campus.edu", "p1").unwrap();

        let mut bookings = BookingStore::with_seat_capacity(&db, 2);
        bookings.book_seat(&ada.id, TimeSlot::Morning, "2025-01-15").unwrap();
        bookings.book_seat("bob@campus.edu", TimeSlot::Morning, "2025-01-15").unwrap();
        bookings.book_cabin(1, &ada.id, TimeSlot::Evening, "2025-02-01").unwrap();

        let mut tasks = TaskStore::new(&db);
        let essay = tasks
            .add_task(NewTask {
                user_id: &ada.id,
                title: "Essay",
                description: "",
                date: "2025-03-01",
                time: "09:00",
            })
            .unwrap();
        tasks.toggle_complete(&essay.id).unwrap();
        essay
    };

    // Reopen everything from the durable slots.
    let db = Database::open(&path).unwrap();
    let mut auth = AuthStore::new(&db);
    let mut bookings = BookingStore::new(&db);
    let tasks = TaskStore::new(&db);

    let ada = auth.current_principal().cloned().unwrap();
    assert_eq!(ada.name, "Ada");
    assert_eq!(auth.login("ada@campus.edu", "p1").unwrap(), ada);

    assert_eq!(bookings.seat_capacity(), 2);
    assert_eq!(bookings.available_seats(TimeSlot::Morning, "2025-01-15"), 0);
    assert_eq!(bookings.book_seat("u3", TimeSlot::Morning, "2025-01-15").err(), Some(Error::Full));
    assert!(!bookings.is_cabin_available(1, TimeSlot::Evening, "2025-02-01"));
    assert!(bookings.is_cabin_available(2, TimeSlot::Evening, "2025-02-01"));

    let restored = tasks.user_tasks(&ada.id);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].id, essay.id);
    assert!(restored[0].completed);
}

#[test]
fn test_stores_do_not_touch_each_others_slots() {
    let dir = tempfile::tempdir().unwrap();
    let db = open_db(&dir);

    let mut auth = AuthStore::new(&db);
    auth.register("Ada", "ada@campus.edu", "p1").unwrap();

    // Booking and task slots were never written; fresh stores see defaults.
    let bookings = BookingStore::new(&db);
    assert_eq!(bookings.seat_capacity(), 50);
    let tasks = TaskStore::new(&db);
    assert!(tasks.user_tasks("ada@campus.edu").is_empty());
}
