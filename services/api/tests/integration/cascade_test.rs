use chrono::Utc;

use evently_api::domain::repository::BookingRepository;
use evently_api::usecase::admin::{DeleteEventAsAdminUseCase, DeleteUserAsAdminUseCase};
use evently_api::usecase::event::DeleteEventUseCase;
use evently_api::usecase::user::DeleteUserUseCase;

use crate::helpers::{Store, booking_at, event_owned_by, user_with_clerk_id};

#[tokio::test]
async fn deleting_an_event_removes_its_bookings() {
    let store = Store::default();
    let owner = user_with_clerk_id("owner");
    let guest_a = user_with_clerk_id("guest-a");
    let guest_b = user_with_clerk_id("guest-b");
    let event = event_owned_by(owner.id, Some(12.0));
    let booking_a = booking_at(guest_a.id, event.id, Utc::now());
    let booking_b = booking_at(guest_b.id, event.id, Utc::now());

    store
        .users
        .rows
        .lock()
        .unwrap()
        .extend([owner.clone(), guest_a, guest_b]);
    store.events.rows.lock().unwrap().push(event.clone());
    store
        .bookings
        .rows
        .lock()
        .unwrap()
        .extend([booking_a.clone(), booking_b.clone()]);

    let delete = DeleteEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    delete.execute("owner", event.id).await.unwrap();

    assert!(store.events.rows.lock().unwrap().is_empty());
    // Lookups for the removed bookings now miss.
    assert!(store.bookings.find_by_id(booking_a.id).await.unwrap().is_none());
    assert!(store.bookings.find_by_id(booking_b.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_a_user_removes_events_their_bookings_and_own_bookings() {
    let store = Store::default();
    let doomed = user_with_clerk_id("doomed");
    let other = user_with_clerk_id("other");

    // The doomed user organizes one event, which the other user booked.
    let owned_event = event_owned_by(doomed.id, Some(20.0));
    let inbound = booking_at(other.id, owned_event.id, Utc::now());
    // The other user organizes an event the doomed user booked.
    let other_event = event_owned_by(other.id, None);
    let outbound = booking_at(doomed.id, other_event.id, Utc::now());

    store
        .users
        .rows
        .lock()
        .unwrap()
        .extend([doomed.clone(), other.clone()]);
    store
        .events
        .rows
        .lock()
        .unwrap()
        .extend([owned_event.clone(), other_event.clone()]);
    store
        .bookings
        .rows
        .lock()
        .unwrap()
        .extend([inbound.clone(), outbound.clone()]);

    let delete = DeleteUserUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    delete.execute("doomed").await.unwrap();

    let users = store.users.rows.lock().unwrap().clone();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, other.id);

    // The doomed user's event is gone, along with the inbound booking on it
    // and the doomed user's own outbound booking.
    let events = store.events.rows.lock().unwrap().clone();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, other_event.id);
    assert!(store.bookings.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn admin_deletions_run_the_same_cascades() {
    let store = Store::default();
    let admin = user_with_clerk_id("admin");
    let target = user_with_clerk_id("target");
    let guest = user_with_clerk_id("guest");
    let event = event_owned_by(target.id, Some(9.0));
    let booking = booking_at(guest.id, event.id, Utc::now());

    store
        .users
        .rows
        .lock()
        .unwrap()
        .extend([admin.clone(), target.clone(), guest.clone()]);
    store.events.rows.lock().unwrap().push(event.clone());
    store.bookings.rows.lock().unwrap().push(booking.clone());

    let delete_event = DeleteEventAsAdminUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    delete_event.execute("admin", event.id).await.unwrap();
    assert!(store.events.rows.lock().unwrap().is_empty());
    assert!(store.bookings.rows.lock().unwrap().is_empty());

    // Re-seed and remove the target user wholesale.
    let event = event_owned_by(target.id, None);
    store.events.rows.lock().unwrap().push(event.clone());
    store
        .bookings
        .rows
        .lock()
        .unwrap()
        .push(booking_at(guest.id, event.id, Utc::now()));

    let delete_user = DeleteUserAsAdminUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    delete_user.execute("admin", target.id).await.unwrap();

    assert!(store.events.rows.lock().unwrap().is_empty());
    assert!(store.bookings.rows.lock().unwrap().is_empty());
    let remaining: Vec<_> = store
        .users
        .rows
        .lock()
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert!(remaining.contains(&admin.id));
    assert!(!remaining.contains(&target.id));
}
