use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::StoragePort;
use crate::domain::types::{Event, EventChanges};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::event::{
    CreateEventInput, CreateEventUseCase, DeleteEventUseCase, GetEventAttendeesUseCase,
    ListEventsUseCase, ListUserEventsUseCase, UpdateEventUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
    /// Image reference resolved to a serving URL, when an image is set.
    pub image_url: Option<String>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EventResponse {
    pub fn new(event: Event, storage: &impl StoragePort) -> Self {
        let image_url = event.image.as_deref().map(|i| storage.serving_url(i));
        EventResponse {
            id: event.id.to_string(),
            user_id: event.user_id.to_string(),
            title: event.title,
            description: event.description,
            date: event.date,
            location: event.location,
            price: event.price,
            category: event.category,
            image: event.image,
            image_url,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

// ── POST /events ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub clerk_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiServiceError> {
    let usecase = CreateEventUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
    };
    let event = usecase
        .execute(
            &body.clerk_id,
            CreateEventInput {
                title: body.title,
                description: body.description,
                date: body.date,
                location: body.location,
                price: body.price,
                category: body.category,
                image: body.image,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(EventResponse::new(event, &state.storage())),
    ))
}

// ── PATCH /events/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub clerk_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = UpdateEventUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
    };
    usecase
        .execute(
            &body.clerk_id,
            id,
            EventChanges {
                title: body.title,
                description: body.description,
                date: body.date,
                location: body.location,
                price: body.price,
                category: body.category,
                image: body.image,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /events/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteEventRequest {
    pub clerk_id: String,
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DeleteEventRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteEventUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    usecase.execute(&body.clerk_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /events ──────────────────────────────────────────────────────────────

pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventResponse>>, ApiServiceError> {
    let usecase = ListEventsUseCase {
        events: state.event_repo(),
    };
    let events = usecase.execute().await?;
    let storage = state.storage();
    Ok(Json(
        events
            .into_iter()
            .map(|e| EventResponse::new(e, &storage))
            .collect(),
    ))
}

// ── GET /events/owned ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OwnedEventsQuery {
    pub clerk_id: Option<String>,
}

pub async fn get_user_events(
    State(state): State<AppState>,
    Query(query): Query<OwnedEventsQuery>,
) -> Result<Json<Vec<EventResponse>>, ApiServiceError> {
    let usecase = ListUserEventsUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
    };
    let events = usecase.execute(query.clerk_id.as_deref()).await?;
    let storage = state.storage();
    Ok(Json(
        events
            .into_iter()
            .map(|e| EventResponse::new(e, &storage))
            .collect(),
    ))
}

// ── GET /events/{id}/attendees ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AttendeesQuery {
    pub clerk_id: String,
}

#[derive(Serialize)]
pub struct AttendeeResponse {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    pub ticket_code: String,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub booking_date: chrono::DateTime<chrono::Utc>,
}

pub async fn get_event_attendees(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AttendeesQuery>,
) -> Result<Json<Vec<AttendeeResponse>>, ApiServiceError> {
    let usecase = GetEventAttendeesUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    let attendees = usecase.execute(&query.clerk_id, id).await?;
    Ok(Json(
        attendees
            .into_iter()
            .map(|a| AttendeeResponse {
                id: a.user.id.to_string(),
                fullname: a.user.fullname,
                email: a.user.email,
                image: a.user.image,
                ticket_code: a.ticket_code,
                booking_date: a.booking_date,
            })
            .collect(),
    ))
}
