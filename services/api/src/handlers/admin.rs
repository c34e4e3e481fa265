use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::StoragePort;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::admin::{
    DeleteEventAsAdminUseCase, DeleteUserAsAdminUseCase, GetStatsUseCase,
    ListEventsAsAdminUseCase, ListUsersAsAdminUseCase,
};

/// Organizer name shown when the owner row has vanished mid-listing.
const UNKNOWN_ORGANIZER: &str = "Unknown";

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdminQuery {
    pub clerk_id: String,
}

#[derive(Deserialize)]
pub struct AdminActionRequest {
    pub clerk_id: String,
}

// ── GET /admin/stats ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ChartPointResponse {
    /// Calendar day as `YYYY-MM-DD`.
    pub date: String,
    pub revenue: f64,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_events: u64,
    pub total_bookings: u64,
    pub total_revenue: f64,
    pub chart_data: Vec<ChartPointResponse>,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<StatsResponse>, ApiServiceError> {
    let usecase = GetStatsUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    let today = chrono::Utc::now().date_naive();
    let stats = usecase.execute(&query.clerk_id, today).await?;
    Ok(Json(StatsResponse {
        total_users: stats.total_users,
        total_events: stats.total_events,
        total_bookings: stats.total_bookings,
        total_revenue: stats.total_revenue,
        chart_data: stats
            .chart
            .into_iter()
            .map(|d| ChartPointResponse {
                date: d.date.to_string(),
                revenue: d.revenue,
            })
            .collect(),
    }))
}

// ── GET /admin/users ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminUserResponse {
    pub id: String,
    pub clerk_id: Option<String>,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_users_admin(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<Vec<AdminUserResponse>>, ApiServiceError> {
    let usecase = ListUsersAsAdminUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute(&query.clerk_id).await?;
    let storage = state.storage();
    Ok(Json(
        users
            .into_iter()
            .map(|u| {
                let image_url = u.image.as_deref().map(|i| storage.serving_url(i));
                AdminUserResponse {
                    id: u.id.to_string(),
                    clerk_id: u.clerk_id,
                    fullname: u.fullname,
                    email: u.email,
                    image: u.image,
                    image_url,
                    created_at: u.created_at,
                    updated_at: u.updated_at,
                }
            })
            .collect(),
    ))
}

// ── GET /admin/events ────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AdminEventResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub organizer_name: String,
    pub organizer_image: Option<String>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_events_admin(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<Vec<AdminEventResponse>>, ApiServiceError> {
    let usecase = ListEventsAsAdminUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
    };
    let listed = usecase.execute(&query.clerk_id).await?;
    let storage = state.storage();
    Ok(Json(
        listed
            .into_iter()
            .map(|entry| {
                let image_url = entry
                    .event
                    .image
                    .as_deref()
                    .map(|i| storage.serving_url(i));
                let organizer_name = entry
                    .organizer
                    .as_ref()
                    .map(|u| u.fullname.clone())
                    .unwrap_or_else(|| UNKNOWN_ORGANIZER.to_owned());
                let organizer_image = entry
                    .organizer
                    .as_ref()
                    .and_then(|u| u.image.as_deref())
                    .map(|i| storage.serving_url(i));
                AdminEventResponse {
                    id: entry.event.id.to_string(),
                    user_id: entry.event.user_id.to_string(),
                    title: entry.event.title,
                    description: entry.event.description,
                    date: entry.event.date,
                    location: entry.event.location,
                    price: entry.event.price,
                    category: entry.event.category,
                    image: entry.event.image,
                    image_url,
                    organizer_name,
                    organizer_image,
                    created_at: entry.event.created_at,
                    updated_at: entry.event.updated_at,
                }
            })
            .collect(),
    ))
}

// ── DELETE /admin/users/{id} ─────────────────────────────────────────────────

pub async fn delete_user_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AdminActionRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteUserAsAdminUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    usecase.execute(&body.clerk_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /admin/events/{id} ────────────────────────────────────────────────

pub async fn delete_event_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AdminActionRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteEventAsAdminUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    usecase.execute(&body.clerk_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
