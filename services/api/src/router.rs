use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use evently_core::health::healthz;
use evently_core::middleware::request_id_layer;

use crate::handlers::{
    admin::{delete_event_admin, delete_user_admin, get_events_admin, get_stats, get_users_admin},
    booking::{book_event, check_booking, get_user_bookings},
    event::{
        create_event, delete_event, get_event_attendees, get_events, get_user_events, update_event,
    },
    upload::generate_upload_url,
    user::{
        delete_user, get_or_create_user, get_user_by_clerk_id, get_user_by_email, get_users,
        login_user, register_user, sync_user, update_user,
    },
};
use crate::state::AppState;

/// Readiness: the service is ready when the database answers.
async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(get_users))
        .route("/users", patch(update_user))
        .route("/users", delete(delete_user))
        .route("/users/sync", post(sync_user))
        .route("/users/get-or-create", post(get_or_create_user))
        .route("/users/register", post(register_user))
        .route("/users/login", post(login_user))
        .route("/users/by-clerk-id/{clerk_id}", get(get_user_by_clerk_id))
        .route("/users/by-email/{email}", get(get_user_by_email))
        // Events
        .route("/events", get(get_events))
        .route("/events", post(create_event))
        .route("/events/owned", get(get_user_events))
        .route("/events/{id}", patch(update_event))
        .route("/events/{id}", delete(delete_event))
        .route("/events/{id}/attendees", get(get_event_attendees))
        // Uploads
        .route("/uploads", post(generate_upload_url))
        // Bookings
        .route("/bookings", post(book_event))
        .route("/bookings", get(get_user_bookings))
        .route("/bookings/check", get(check_booking))
        // Admin
        .route("/admin/stats", get(get_stats))
        .route("/admin/users", get(get_users_admin))
        .route("/admin/events", get(get_events_admin))
        .route("/admin/users/{id}", delete(delete_user_admin))
        .route("/admin/events/{id}", delete(delete_event_admin))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
