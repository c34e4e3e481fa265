use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiServiceError;
use crate::handlers::event::EventResponse;
use crate::state::AppState;
use crate::usecase::booking::{BookEventUseCase, CheckBookingUseCase, GetUserBookingsUseCase};

// ── POST /bookings ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct BookEventRequest {
    pub clerk_id: String,
    pub event_id: Uuid,
}

#[derive(Serialize)]
pub struct BookEventResponse {
    pub booking_id: String,
    pub ticket_code: String,
}

pub async fn book_event(
    State(state): State<AppState>,
    Json(body): Json<BookEventRequest>,
) -> Result<(StatusCode, Json<BookEventResponse>), ApiServiceError> {
    let usecase = BookEventUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    let out = usecase.execute(&body.clerk_id, body.event_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookEventResponse {
            booking_id: out.booking_id.to_string(),
            ticket_code: out.ticket_code,
        }),
    ))
}

// ── GET /bookings ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserBookingsQuery {
    pub clerk_id: Option<String>,
}

#[derive(Serialize)]
pub struct UserBookingResponse {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub ticket_code: String,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub event: EventResponse,
}

pub async fn get_user_bookings(
    State(state): State<AppState>,
    Query(query): Query<UserBookingsQuery>,
) -> Result<Json<Vec<UserBookingResponse>>, ApiServiceError> {
    let usecase = GetUserBookingsUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    let bookings = usecase.execute(query.clerk_id.as_deref()).await?;
    let storage = state.storage();
    Ok(Json(
        bookings
            .into_iter()
            .map(|b| UserBookingResponse {
                id: b.booking.id.to_string(),
                user_id: b.booking.user_id.to_string(),
                event_id: b.booking.event_id.to_string(),
                ticket_code: b.booking.ticket_code,
                created_at: b.booking.created_at,
                updated_at: b.booking.updated_at,
                event: EventResponse::new(b.event, &storage),
            })
            .collect(),
    ))
}

// ── GET /bookings/check ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CheckBookingQuery {
    pub clerk_id: Option<String>,
    pub event_id: Uuid,
}

/// Answers a bare JSON boolean; absent or unknown callers are simply not
/// booked.
pub async fn check_booking(
    State(state): State<AppState>,
    Query(query): Query<CheckBookingQuery>,
) -> Result<Json<bool>, ApiServiceError> {
    let usecase = CheckBookingUseCase {
        users: state.user_repo(),
        bookings: state.booking_repo(),
    };
    let booked = usecase
        .execute(query.clerk_id.as_deref(), query.event_id)
        .await?;
    Ok(Json(booked))
}
