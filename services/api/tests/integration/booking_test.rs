use evently_api::error::ApiServiceError;
use evently_api::usecase::booking::{BookEventUseCase, CheckBookingUseCase};
use evently_api::usecase::event::{CreateEventInput, CreateEventUseCase};
use evently_api::usecase::user::{SyncUserInput, SyncUserUseCase};

use crate::helpers::Store;

fn sync_input(clerk_id: &str) -> SyncUserInput {
    SyncUserInput {
        clerk_id: clerk_id.into(),
        email: format!("{clerk_id}@example.com"),
        name: clerk_id.to_owned(),
        image: None,
    }
}

/// Full flow over one store: two synced users, an event, a booking, a check.
#[tokio::test]
async fn booking_a_free_event_end_to_end() {
    let store = Store::default();

    let sync = SyncUserUseCase {
        repo: store.users.clone(),
    };
    sync.execute(sync_input("organizer")).await.unwrap();
    sync.execute(sync_input("guest")).await.unwrap();

    // Free event: price absent.
    let create = CreateEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
    };
    let event = create
        .execute(
            "organizer",
            CreateEventInput {
                title: "Open mic".into(),
                description: None,
                date: "2026-08-20".into(),
                location: None,
                price: None,
                category: "music".into(),
                image: None,
            },
        )
        .await
        .unwrap();

    let book = BookEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    let out = book.execute("guest", event.id).await.unwrap();
    assert_eq!(out.ticket_code.len(), 8);
    assert!(out.ticket_code.chars().all(|c| c.is_ascii_alphanumeric()));

    let check = CheckBookingUseCase {
        users: store.users.clone(),
        bookings: store.bookings.clone(),
    };
    assert!(check.execute(Some("guest"), event.id).await.unwrap());
    assert!(!check.execute(Some("organizer"), event.id).await.unwrap());
}

#[tokio::test]
async fn second_booking_for_the_same_pair_conflicts() {
    let store = Store::default();
    let sync = SyncUserUseCase {
        repo: store.users.clone(),
    };
    sync.execute(sync_input("organizer")).await.unwrap();
    sync.execute(sync_input("guest")).await.unwrap();

    let create = CreateEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
    };
    let event = create
        .execute(
            "organizer",
            CreateEventInput {
                title: "Workshop".into(),
                description: None,
                date: "2026-09-01".into(),
                location: None,
                price: Some(30.0),
                category: "workshop".into(),
                image: None,
            },
        )
        .await
        .unwrap();

    let book = BookEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    book.execute("guest", event.id).await.unwrap();
    let second = book.execute("guest", event.id).await;
    assert!(matches!(second, Err(ApiServiceError::AlreadyBooked)));
    assert_eq!(store.bookings.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn organizer_cannot_book_their_own_event() {
    let store = Store::default();
    let sync = SyncUserUseCase {
        repo: store.users.clone(),
    };
    sync.execute(sync_input("organizer")).await.unwrap();

    let create = CreateEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
    };
    let event = create
        .execute(
            "organizer",
            CreateEventInput {
                title: "Private dinner".into(),
                description: None,
                date: "2026-08-30".into(),
                location: None,
                price: Some(80.0),
                category: "dinner".into(),
                image: None,
            },
        )
        .await
        .unwrap();

    let book = BookEventUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    };
    let result = book.execute("organizer", event.id).await;
    assert!(matches!(result, Err(ApiServiceError::OwnEventBooking)));
    assert!(store.bookings.rows.lock().unwrap().is_empty());
}
