use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::{BookingRepository, EventRepository, UserRepository};
use crate::domain::types::{Event, EventChanges, User};
use crate::error::ApiServiceError;

// ── CreateEvent ──────────────────────────────────────────────────────────────

pub struct CreateEventInput {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
}

pub struct CreateEventUseCase<U: UserRepository, E: EventRepository> {
    pub users: U,
    pub events: E,
}

impl<U: UserRepository, E: EventRepository> CreateEventUseCase<U, E> {
    pub async fn execute(
        &self,
        clerk_id: &str,
        input: CreateEventInput,
    ) -> Result<Event, ApiServiceError> {
        let user = self
            .users
            .find_by_clerk_id(clerk_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            user_id: user.id,
            title: input.title,
            description: input.description,
            date: input.date,
            location: input.location,
            price: input.price,
            category: input.category,
            image: input.image,
            created_at: now,
            updated_at: now,
        };
        self.events.create(&event).await?;
        Ok(event)
    }
}

// ── UpdateEvent ──────────────────────────────────────────────────────────────

pub struct UpdateEventUseCase<U: UserRepository, E: EventRepository> {
    pub users: U,
    pub events: E,
}

impl<U: UserRepository, E: EventRepository> UpdateEventUseCase<U, E> {
    pub async fn execute(
        &self,
        clerk_id: &str,
        event_id: Uuid,
        changes: EventChanges,
    ) -> Result<(), ApiServiceError> {
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
        if event.user_id != user.id {
            return Err(ApiServiceError::NotEventOwner);
        }
        self.events.update(event_id, &changes).await
    }
}

// ── DeleteEvent (cascading) ──────────────────────────────────────────────────

/// Remove the event's bookings, then the event. Bookings go first so a
/// mid-way failure leaves a still-listed event rather than dangling bookings.
pub(crate) async fn delete_event_cascade<E, B>(
    events: &E,
    bookings: &B,
    event_id: Uuid,
) -> Result<(), ApiServiceError>
where
    E: EventRepository,
    B: BookingRepository,
{
    for booking in bookings.list_by_event(event_id).await? {
        bookings.delete(booking.id).await?;
    }
    events.delete(event_id).await
}

pub struct DeleteEventUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository> DeleteEventUseCase<U, E, B> {
    pub async fn execute(&self, clerk_id: &str, event_id: Uuid) -> Result<(), ApiServiceError> {
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
        if event.user_id != user.id {
            return Err(ApiServiceError::NotEventOwner);
        }
        delete_event_cascade(&self.events, &self.bookings, event_id).await
    }
}

// ── ListUserEvents ───────────────────────────────────────────────────────────

pub struct ListUserEventsUseCase<U: UserRepository, E: EventRepository> {
    pub users: U,
    pub events: E,
}

impl<U: UserRepository, E: EventRepository> ListUserEventsUseCase<U, E> {
    /// The caller's own events, newest first. An absent or unknown caller
    /// yields an empty list, not an error.
    pub async fn execute(&self, clerk_id: Option<&str>) -> Result<Vec<Event>, ApiServiceError> {
        let Some(clerk_id) = clerk_id.filter(|c| !c.is_empty()) else {
            return Ok(vec![]);
        };
        let Some(user) = self.users.find_by_clerk_id(clerk_id).await? else {
            return Ok(vec![]);
        };
        self.events.list_by_owner(user.id).await
    }
}

// ── ListEvents ───────────────────────────────────────────────────────────────

pub struct ListEventsUseCase<E: EventRepository> {
    pub events: E,
}

impl<E: EventRepository> ListEventsUseCase<E> {
    pub async fn execute(&self) -> Result<Vec<Event>, ApiServiceError> {
        self.events.list_all().await
    }
}

// ── GetEventAttendees ────────────────────────────────────────────────────────

/// A user holding a booking on an event, with their ticket.
pub struct Attendee {
    pub user: User,
    pub ticket_code: String,
    pub booking_date: DateTime<Utc>,
}

pub struct GetEventAttendeesUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository>
    GetEventAttendeesUseCase<U, E, B>
{
    /// Attendees are visible to the event owner only; anyone else (and any
    /// unknown event) sees an empty list rather than an error.
    pub async fn execute(
        &self,
        clerk_id: &str,
        event_id: Uuid,
    ) -> Result<Vec<Attendee>, ApiServiceError> {
        let Some(user) = self.users.find_by_clerk_id(clerk_id).await? else {
            return Ok(vec![]);
        };
        let Some(event) = self.events.find_by_id(event_id).await? else {
            return Ok(vec![]);
        };
        if event.user_id != user.id {
            return Ok(vec![]);
        }

        let bookings = self.bookings.list_by_event(event_id).await?;
        let user_ids: Vec<Uuid> = bookings.iter().map(|b| b.user_id).collect();
        let attendees = self.users.find_by_ids(&user_ids).await?;

        // Join in memory; bookings whose user row has vanished are skipped.
        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                let user = attendees.iter().find(|u| u.id == booking.user_id)?.clone();
                Some(Attendee {
                    user,
                    ticket_code: booking.ticket_code,
                    booking_date: booking.created_at,
                })
            })
            .collect())
    }
}
