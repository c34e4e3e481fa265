use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{BookingRepository, EventRepository, UserRepository};
use crate::domain::types::{Booking, Event, generate_ticket_code};
use crate::error::ApiServiceError;

// ── BookEvent ────────────────────────────────────────────────────────────────

pub struct BookEventOutput {
    pub booking_id: Uuid,
    pub ticket_code: String,
}

pub struct BookEventUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository> BookEventUseCase<U, E, B> {
    /// Book an event for the caller. At most one booking per (user, event)
    /// pair; the owner cannot book their own event. The existence check and
    /// the insert are not atomic, so concurrent calls for the same pair can
    /// race. An accepted limitation.
    pub async fn execute(
        &self,
        clerk_id: &str,
        event_id: Uuid,
    ) -> Result<BookEventOutput, ApiServiceError> {
        let user = self
            .users
            .find_by_clerk_id(clerk_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(ApiServiceError::EventNotFound)?;
        if event.user_id == user.id {
            return Err(ApiServiceError::OwnEventBooking);
        }
        if self
            .bookings
            .find_for_user_event(user.id, event_id)
            .await?
            .is_some()
        {
            return Err(ApiServiceError::AlreadyBooked);
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: user.id,
            event_id,
            ticket_code: generate_ticket_code(),
            created_at: now,
            updated_at: now,
        };
        self.bookings.create(&booking).await?;
        Ok(BookEventOutput {
            booking_id: booking.id,
            ticket_code: booking.ticket_code,
        })
    }
}

// ── GetUserBookings ──────────────────────────────────────────────────────────

/// A booking joined with the event it is for.
pub struct BookingWithEvent {
    pub booking: Booking,
    pub event: Event,
}

pub struct GetUserBookingsUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository>
    GetUserBookingsUseCase<U, E, B>
{
    /// The caller's bookings, each joined with its event. Bookings whose
    /// event has vanished are dropped from the result.
    pub async fn execute(
        &self,
        clerk_id: Option<&str>,
    ) -> Result<Vec<BookingWithEvent>, ApiServiceError> {
        let Some(clerk_id) = clerk_id.filter(|c| !c.is_empty()) else {
            return Ok(vec![]);
        };
        let Some(user) = self.users.find_by_clerk_id(clerk_id).await? else {
            return Ok(vec![]);
        };

        let bookings = self.bookings.list_by_user(user.id).await?;
        let event_ids: Vec<Uuid> = bookings.iter().map(|b| b.event_id).collect();
        let events = self.events.find_by_ids(&event_ids).await?;

        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                let event = events.iter().find(|e| e.id == booking.event_id)?.clone();
                Some(BookingWithEvent { booking, event })
            })
            .collect())
    }
}

// ── CheckBooking ─────────────────────────────────────────────────────────────

pub struct CheckBookingUseCase<U: UserRepository, B: BookingRepository> {
    pub users: U,
    pub bookings: B,
}

impl<U: UserRepository, B: BookingRepository> CheckBookingUseCase<U, B> {
    /// Whether the caller holds a booking on the event. Absent or unknown
    /// callers simply have no booking.
    pub async fn execute(
        &self,
        clerk_id: Option<&str>,
        event_id: Uuid,
    ) -> Result<bool, ApiServiceError> {
        let Some(clerk_id) = clerk_id.filter(|c| !c.is_empty()) else {
            return Ok(false);
        };
        let Some(user) = self.users.find_by_clerk_id(clerk_id).await? else {
            return Ok(false);
        };
        Ok(self
            .bookings
            .find_for_user_event(user.id, event_id)
            .await?
            .is_some())
    }
}
