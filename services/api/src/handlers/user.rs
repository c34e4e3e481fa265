use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    DeleteUserUseCase, GetOrCreateUserInput, GetOrCreateUserUseCase, GetUserByClerkIdUseCase,
    GetUserByEmailUseCase, ListUsersUseCase, LoginUserUseCase, RegisterUserInput,
    RegisterUserUseCase, SyncUserInput, SyncUserUseCase, UpdateUserInput, UpdateUserUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub clerk_id: Option<String>,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.to_string(),
            clerk_id: user.clerk_id,
            fullname: user.fullname,
            email: user.email,
            image: user.image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ── POST /users/sync ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SyncUserRequest {
    pub clerk_id: String,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

pub async fn sync_user(
    State(state): State<AppState>,
    Json(body): Json<SyncUserRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = SyncUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(SyncUserInput {
            clerk_id: body.clerk_id,
            email: body.email,
            name: body.name,
            image: body.image,
        })
        .await?;
    Ok(Json(user.into()))
}

// ── PATCH /users ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub clerk_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            &body.clerk_id,
            UpdateUserInput {
                email: body.email,
                name: body.name,
                image: body.image,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── DELETE /users ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteUserRequest {
    pub clerk_id: String,
}

pub async fn delete_user(
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequest>,
) -> Result<StatusCode, ApiServiceError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
        events: state.event_repo(),
        bookings: state.booking_repo(),
    };
    usecase.execute(&body.clerk_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /users/by-clerk-id/{clerk_id} ────────────────────────────────────────

pub async fn get_user_by_clerk_id(
    State(state): State<AppState>,
    Path(clerk_id): Path<String>,
) -> Result<Json<Option<UserResponse>>, ApiServiceError> {
    let usecase = GetUserByClerkIdUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&clerk_id).await?;
    Ok(Json(user.map(UserResponse::from)))
}

// ── GET /users/by-email/{email} ──────────────────────────────────────────────

pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<UserResponse>>, ApiServiceError> {
    let usecase = GetUserByEmailUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&email).await?;
    Ok(Json(user.map(UserResponse::from)))
}

// ── POST /users/get-or-create ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GetOrCreateUserRequest {
    pub clerk_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

pub async fn get_or_create_user(
    State(state): State<AppState>,
    Json(body): Json<GetOrCreateUserRequest>,
) -> Result<Json<Option<UserResponse>>, ApiServiceError> {
    let usecase = GetOrCreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(GetOrCreateUserInput {
            clerk_id: body.clerk_id,
            email: body.email,
            name: body.name,
            image: body.image,
        })
        .await?;
    Ok(Json(user.map(UserResponse::from)))
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /users/register (legacy) ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterUserResponse {
    pub id: String,
    pub fullname: String,
    pub email: String,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegisterUserResponse>), ApiServiceError> {
    let usecase = RegisterUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            fullname: body.fullname,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            id: user.id.to_string(),
            fullname: user.fullname,
            email: user.email,
            created_at: user.created_at,
        }),
    ))
}

// ── POST /users/login (legacy) ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginUserResponse {
    pub id: String,
    pub clerk_id: Option<String>,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    #[serde(serialize_with = "evently_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Failed logins answer with JSON `null`, not an error status; the legacy
/// front end branches on the body.
pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginUserRequest>,
) -> Result<Json<Option<LoginUserResponse>>, ApiServiceError> {
    let usecase = LoginUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(&body.email, &body.password).await?;
    Ok(Json(user.map(|u| LoginUserResponse {
        id: u.id.to_string(),
        clerk_id: u.clerk_id,
        fullname: u.fullname,
        email: u.email,
        image: u.image,
        created_at: u.created_at,
    })))
}
