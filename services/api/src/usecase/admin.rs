use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::repository::{BookingRepository, EventRepository, UserRepository};
use crate::domain::types::{Event, User};
use crate::error::ApiServiceError;
use crate::usecase::event::delete_event_cascade;
use crate::usecase::user::delete_user_cascade;

/// Number of days in the trailing revenue histogram.
pub const REVENUE_WINDOW_DAYS: i64 = 30;

/// Resolve the admin caller. Any existing account passes: the data model has
/// no role field, so this trusts the front end's admin gating. A known
/// weakness, not a contract.
async fn require_admin<U: UserRepository>(
    users: &U,
    clerk_id: &str,
) -> Result<User, ApiServiceError> {
    users
        .find_by_clerk_id(clerk_id)
        .await?
        .ok_or(ApiServiceError::UserNotFound)
}

// ── GetStats ─────────────────────────────────────────────────────────────────

pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
}

pub struct Stats {
    pub total_users: u64,
    pub total_events: u64,
    pub total_bookings: u64,
    pub total_revenue: f64,
    /// One entry per calendar day, oldest first, ending today. Days with no
    /// bookings report 0.
    pub chart: Vec<DailyRevenue>,
}

pub struct GetStatsUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository> GetStatsUseCase<U, E, B> {
    /// Full-table counts, total booking revenue, and the 30-day trailing
    /// daily revenue histogram. One in-memory pass over the fetched rows,
    /// fine at current volumes; at scale this becomes an indexed aggregation
    /// or a precomputed rollup.
    pub async fn execute(&self, clerk_id: &str, today: NaiveDate) -> Result<Stats, ApiServiceError> {
        require_admin(&self.users, clerk_id).await?;

        let users = self.users.list_all().await?;
        let events = self.events.list_all().await?;
        let bookings = self.bookings.list_all().await?;

        // Missing price means free, contributing 0.
        let price_by_event: HashMap<Uuid, f64> = events
            .iter()
            .map(|e| (e.id, e.price.unwrap_or(0.0)))
            .collect();

        let mut total_revenue = 0.0;
        let window_start = today - chrono::Duration::days(REVENUE_WINDOW_DAYS - 1);
        let mut chart: Vec<DailyRevenue> = (0..REVENUE_WINDOW_DAYS)
            .map(|offset| DailyRevenue {
                date: window_start + chrono::Duration::days(offset),
                revenue: 0.0,
            })
            .collect();

        for booking in &bookings {
            let price = price_by_event
                .get(&booking.event_id)
                .copied()
                .unwrap_or(0.0);
            total_revenue += price;

            // Bucket by the UTC calendar day of the booking's creation.
            let day = booking.created_at.date_naive();
            let offset = (day - window_start).num_days();
            if (0..REVENUE_WINDOW_DAYS).contains(&offset) {
                chart[offset as usize].revenue += price;
            }
        }

        Ok(Stats {
            total_users: users.len() as u64,
            total_events: events.len() as u64,
            total_bookings: bookings.len() as u64,
            total_revenue,
            chart,
        })
    }
}

// ── ListUsersAsAdmin ─────────────────────────────────────────────────────────

pub struct ListUsersAsAdminUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersAsAdminUseCase<U> {
    pub async fn execute(&self, clerk_id: &str) -> Result<Vec<User>, ApiServiceError> {
        require_admin(&self.users, clerk_id).await?;
        self.users.list_all().await
    }
}

// ── ListEventsAsAdmin ────────────────────────────────────────────────────────

/// An event joined with its organizer, when the owner row still exists.
pub struct EventWithOrganizer {
    pub event: Event,
    pub organizer: Option<User>,
}

pub struct ListEventsAsAdminUseCase<U: UserRepository, E: EventRepository> {
    pub users: U,
    pub events: E,
}

impl<U: UserRepository, E: EventRepository> ListEventsAsAdminUseCase<U, E> {
    pub async fn execute(&self, clerk_id: &str) -> Result<Vec<EventWithOrganizer>, ApiServiceError> {
        require_admin(&self.users, clerk_id).await?;
        let events = self.events.list_all().await?;
        let owner_ids: Vec<Uuid> = events.iter().map(|e| e.user_id).collect();
        let owners = self.users.find_by_ids(&owner_ids).await?;
        Ok(events
            .into_iter()
            .map(|event| {
                let organizer = owners.iter().find(|u| u.id == event.user_id).cloned();
                EventWithOrganizer { event, organizer }
            })
            .collect())
    }
}

// ── DeleteUserAsAdmin / DeleteEventAsAdmin ───────────────────────────────────

pub struct DeleteUserAsAdminUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository>
    DeleteUserAsAdminUseCase<U, E, B>
{
    /// Same cascade as self-deletion; only the target resolution differs.
    pub async fn execute(&self, clerk_id: &str, user_id: Uuid) -> Result<(), ApiServiceError> {
        require_admin(&self.users, clerk_id).await?;
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ApiServiceError::UserNotFound);
        }
        delete_user_cascade(&self.users, &self.events, &self.bookings, user_id).await
    }
}

pub struct DeleteEventAsAdminUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository>
    DeleteEventAsAdminUseCase<U, E, B>
{
    /// Owner check skipped; bookings still go before the event.
    pub async fn execute(&self, clerk_id: &str, event_id: Uuid) -> Result<(), ApiServiceError> {
        require_admin(&self.users, clerk_id).await?;
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(ApiServiceError::EventNotFound);
        }
        delete_event_cascade(&self.events, &self.bookings, event_id).await
    }
}
