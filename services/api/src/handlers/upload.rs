use axum::{Json, extract::State};
use serde::Serialize;

use crate::domain::repository::StoragePort;
use crate::error::ApiServiceError;
use crate::state::AppState;

// ── POST /uploads ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

/// Mint a fresh opaque upload URL for the front end to PUT an image to.
pub async fn generate_upload_url(
    State(state): State<AppState>,
) -> Result<Json<UploadUrlResponse>, ApiServiceError> {
    Ok(Json(UploadUrlResponse {
        upload_url: state.storage().new_upload_url(),
    }))
}
