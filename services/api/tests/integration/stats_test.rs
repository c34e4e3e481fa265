use chrono::{Datelike, NaiveDate, TimeZone, Utc};

use evently_api::usecase::admin::GetStatsUseCase;

use crate::helpers::{Store, booking_at, event_owned_by, user_with_clerk_id};

#[tokio::test]
async fn histogram_sums_only_the_trailing_thirty_days() {
    let store = Store::default();
    let admin = user_with_clerk_id("admin");
    let guest = user_with_clerk_id("guest");
    let event = event_owned_by(admin.id, Some(10.0));

    store
        .users
        .rows
        .lock()
        .unwrap()
        .extend([admin.clone(), guest.clone()]);
    store.events.rows.lock().unwrap().push(event.clone());

    let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    // One booking per day across 35 days, so five land outside the window.
    for days_ago in 0..35 {
        let day = today - chrono::Duration::days(days_ago);
        let at = Utc
            .with_ymd_and_hms(day.year(), day.month(), day.day(), 9, 30, 0)
            .unwrap();
        store
            .bookings
            .rows
            .lock()
            .unwrap()
            .push(booking_at(guest.id, event.id, at));
    }

    let stats = GetStatsUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    }
    .execute("admin", today)
    .await
    .unwrap();

    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_events, 1);
    assert_eq!(stats.total_bookings, 35);
    assert_eq!(stats.total_revenue, 350.0);

    assert_eq!(stats.chart.len(), 30);
    let windowed: f64 = stats.chart.iter().map(|d| d.revenue).sum();
    assert_eq!(windowed, 300.0);
    // Every in-window day holds exactly one 10.0 booking.
    assert!(stats.chart.iter().all(|d| d.revenue == 10.0));
}

#[tokio::test]
async fn revenue_treats_missing_prices_and_missing_events_as_zero() {
    let store = Store::default();
    let admin = user_with_clerk_id("admin");
    let guest = user_with_clerk_id("guest");
    let paid = event_owned_by(admin.id, Some(25.0));
    let free = event_owned_by(admin.id, None);

    store
        .users
        .rows
        .lock()
        .unwrap()
        .extend([admin.clone(), guest.clone()]);
    store
        .events
        .rows
        .lock()
        .unwrap()
        .extend([paid.clone(), free.clone()]);

    let now = Utc::now();
    let orphan_event_id = uuid::Uuid::new_v4();
    store.bookings.rows.lock().unwrap().extend([
        booking_at(guest.id, paid.id, now),
        booking_at(guest.id, free.id, now),
        booking_at(guest.id, orphan_event_id, now),
    ]);

    let stats = GetStatsUseCase {
        users: store.users.clone(),
        events: store.events.clone(),
        bookings: store.bookings.clone(),
    }
    .execute("admin", now.date_naive())
    .await
    .unwrap();

    assert_eq!(stats.total_bookings, 3);
    assert_eq!(stats.total_revenue, 25.0);
}
