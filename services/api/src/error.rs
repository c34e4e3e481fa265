use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("event not found")]
    EventNotFound,
    #[error("not the event owner")]
    NotEventOwner,
    #[error("already booked")]
    AlreadyBooked,
    #[error("cannot book your own event")]
    OwnEventBooking,
    #[error("an account with this email already exists")]
    EmailTaken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EventNotFound => "EVENT_NOT_FOUND",
            Self::NotEventOwner => "NOT_EVENT_OWNER",
            Self::AlreadyBooked => "ALREADY_BOOKED",
            Self::OwnEventBooking => "OWN_EVENT_BOOKING",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::EventNotFound => StatusCode::NOT_FOUND,
            Self::NotEventOwner => StatusCode::FORBIDDEN,
            Self::AlreadyBooked | Self::EmailTaken => StatusCode::CONFLICT,
            Self::OwnEventBooking => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only. TraceLayer already records
        // method/uri/status for all requests, and 4xx are expected client
        // errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
