use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use evently_api::domain::repository::{BookingRepository, EventRepository, UserRepository};
use evently_api::domain::types::{Booking, Event, EventChanges, User, UserPatch};
use evently_api::error::ApiServiceError;

// ── In-memory repositories ───────────────────────────────────────────────────
//
// Cloning shares the underlying store, so several use cases can run against
// the same data within one test.

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    pub rows: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
    async fn find_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.clerk_id.as_deref() == Some(clerk_id))
            .cloned())
    }
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
    async fn list_all(&self) -> Result<Vec<User>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }
    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().push(user.clone());
        Ok(())
    }
    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .expect("update of missing user");
        if let Some(ref clerk_id) = patch.clerk_id {
            user.clerk_id = Some(clerk_id.clone());
        }
        if let Some(ref fullname) = patch.fullname {
            user.fullname = fullname.clone();
        }
        if let Some(ref email) = patch.email {
            user.email = email.clone();
        }
        if let Some(ref image) = patch.image {
            user.image = Some(image.clone());
        }
        user.updated_at = Utc::now();
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEvents {
    pub rows: Arc<Mutex<Vec<Event>>>,
}

impl EventRepository for InMemoryEvents {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Event>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
    async fn list_all(&self) -> Result<Vec<Event>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }
    async fn create(&self, event: &Event) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().push(event.clone());
        Ok(())
    }
    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<(), ApiServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let event = rows
            .iter_mut()
            .find(|e| e.id == id)
            .expect("update of missing event");
        event.title = changes.title.clone();
        event.description = changes.description.clone();
        event.date = changes.date.clone();
        event.location = changes.location.clone();
        event.price = changes.price;
        event.category = changes.category.clone();
        event.image = changes.image.clone();
        event.updated_at = Utc::now();
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryBookings {
    pub rows: Arc<Mutex<Vec<Booking>>>,
}

impl BookingRepository for InMemoryBookings {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }
    async fn find_for_user_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Booking>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id && b.event_id == event_id)
            .cloned())
    }
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Booking>, ApiServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.event_id == event_id)
            .cloned()
            .collect())
    }
    async fn list_all(&self) -> Result<Vec<Booking>, ApiServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }
    async fn create(&self, booking: &Booking) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().push(booking.clone());
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        self.rows.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

/// All three stores together, as most flows touch more than one table.
#[derive(Clone, Default)]
pub struct Store {
    pub users: InMemoryUsers,
    pub events: InMemoryEvents,
    pub bookings: InMemoryBookings,
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn user_with_clerk_id(clerk_id: &str) -> User {
    User {
        id: Uuid::new_v4(),
        clerk_id: Some(clerk_id.into()),
        fullname: clerk_id.to_owned(),
        email: format!("{clerk_id}@example.com"),
        image: None,
        password: "clerk_auth".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn event_owned_by(user_id: Uuid, price: Option<f64>) -> Event {
    Event {
        id: Uuid::new_v4(),
        user_id,
        title: "Launch party".into(),
        description: Some("Doors at eight".into()),
        date: "2026-10-01".into(),
        location: Some("Warehouse 9".into()),
        price,
        category: "party".into(),
        image: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn booking_at(user_id: Uuid, event_id: Uuid, at: DateTime<Utc>) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        user_id,
        event_id,
        ticket_code: "FIXTURE1".into(),
        created_at: at,
        updated_at: at,
    }
}
