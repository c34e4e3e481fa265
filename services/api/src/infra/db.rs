use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use evently_api_schema::{bookings, events, users};

use crate::domain::repository::{BookingRepository, EventRepository, UserRepository};
use crate::domain::types::{Booking, Event, EventChanges, User, UserPatch};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiServiceError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find users by ids")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::ClerkId.eq(clerk_id))
            .one(&self.db)
            .await
            .context("find user by clerk id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list_all(&self) -> Result<Vec<User>, ApiServiceError> {
        let models = users::Entity::find()
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            clerk_id: Set(user.clerk_id.clone()),
            fullname: Set(user.fullname.clone()),
            email: Set(user.email.clone()),
            image: Set(user.image.clone()),
            password: Set(user.password.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiServiceError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref clerk_id) = patch.clerk_id {
            am.clerk_id = Set(Some(clerk_id.clone()));
        }
        if let Some(ref fullname) = patch.fullname {
            am.fullname = Set(fullname.clone());
        }
        if let Some(ref email) = patch.email {
            am.email = Set(email.clone());
        }
        if let Some(ref image) = patch.image {
            am.image = Set(Some(image.clone()));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        clerk_id: model.clerk_id,
        fullname: model.fullname,
        email: model.email,
        image: model.image,
        password: model.password,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Event repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEventRepository {
    pub db: DatabaseConnection,
}

impl EventRepository for DbEventRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, ApiServiceError> {
        let model = events::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find event by id")?;
        Ok(model.map(event_from_model))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, ApiServiceError> {
        let models = events::Entity::find()
            .filter(events::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("find events by ids")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Event>, ApiServiceError> {
        let models = events::Entity::find()
            .filter(events::Column::UserId.eq(user_id))
            .order_by_desc(events::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list events by owner")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<Event>, ApiServiceError> {
        let models = events::Entity::find()
            .order_by_desc(events::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list events")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn create(&self, event: &Event) -> Result<(), ApiServiceError> {
        events::ActiveModel {
            id: Set(event.id),
            user_id: Set(event.user_id),
            title: Set(event.title.clone()),
            description: Set(event.description.clone()),
            date: Set(event.date.clone()),
            location: Set(event.location.clone()),
            price: Set(event.price),
            category: Set(event.category.clone()),
            image: Set(event.image.clone()),
            created_at: Set(event.created_at),
            updated_at: Set(event.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create event")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<(), ApiServiceError> {
        events::ActiveModel {
            id: Set(id),
            title: Set(changes.title.clone()),
            description: Set(changes.description.clone()),
            date: Set(changes.date.clone()),
            location: Set(changes.location.clone()),
            price: Set(changes.price),
            category: Set(changes.category.clone()),
            image: Set(changes.image.clone()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update event")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        events::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete event")?;
        Ok(())
    }
}

fn event_from_model(model: events::Model) -> Event {
    Event {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        date: model.date,
        location: model.location,
        price: model.price,
        category: model.category,
        image: model.image,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Booking repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookingRepository {
    pub db: DatabaseConnection,
}

impl BookingRepository for DbBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ApiServiceError> {
        let model = bookings::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find booking by id")?;
        Ok(model.map(booking_from_model))
    }

    async fn find_for_user_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Booking>, ApiServiceError> {
        let model = bookings::Entity::find()
            .filter(bookings::Column::UserId.eq(user_id))
            .filter(bookings::Column::EventId.eq(event_id))
            .one(&self.db)
            .await
            .context("find booking for user and event")?;
        Ok(model.map(booking_from_model))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, ApiServiceError> {
        let models = bookings::Entity::find()
            .filter(bookings::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list bookings by user")?;
        Ok(models.into_iter().map(booking_from_model).collect())
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Booking>, ApiServiceError> {
        let models = bookings::Entity::find()
            .filter(bookings::Column::EventId.eq(event_id))
            .all(&self.db)
            .await
            .context("list bookings by event")?;
        Ok(models.into_iter().map(booking_from_model).collect())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, ApiServiceError> {
        let models = bookings::Entity::find()
            .all(&self.db)
            .await
            .context("list bookings")?;
        Ok(models.into_iter().map(booking_from_model).collect())
    }

    async fn create(&self, booking: &Booking) -> Result<(), ApiServiceError> {
        bookings::ActiveModel {
            id: Set(booking.id),
            user_id: Set(booking.user_id),
            event_id: Set(booking.event_id),
            ticket_code: Set(booking.ticket_code.clone()),
            created_at: Set(booking.created_at),
            updated_at: Set(booking.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create booking")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError> {
        bookings::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete booking")?;
        Ok(())
    }
}

fn booking_from_model(model: bookings::Model) -> Booking {
    Booking {
        id: model.id,
        user_id: model.user_id,
        event_id: model.event_id,
        ticket_code: model.ticket_code,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
