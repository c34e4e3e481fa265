use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{BookingRepository, EventRepository, UserRepository};
use crate::domain::types::{User, UserPatch};
use crate::error::ApiServiceError;

/// Placeholder password stored for accounts created through identity sync.
pub const CLERK_AUTH_PASSWORD: &str = "clerk_auth";

/// Treat the empty string as "not provided" so patches never blank a stored
/// value, matching the front end's loose argument handling.
fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

// ── SyncUser ─────────────────────────────────────────────────────────────────

pub struct SyncUserInput {
    pub clerk_id: String,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

pub struct SyncUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SyncUserUseCase<R> {
    /// Resolve to a single user record: by identity id first, then by email
    /// (migration path), else create. Matches are patched without discarding
    /// stored values when new ones are absent.
    pub async fn execute(&self, input: SyncUserInput) -> Result<User, ApiServiceError> {
        if let Some(user) = self.repo.find_by_clerk_id(&input.clerk_id).await? {
            let patch = UserPatch {
                clerk_id: None,
                fullname: non_empty(input.name),
                email: Some(input.email),
                image: input.image,
            };
            self.repo.update(user.id, &patch).await?;
            return self
                .repo
                .find_by_id(user.id)
                .await?
                .ok_or(ApiServiceError::UserNotFound);
        }

        if let Some(user) = self.repo.find_by_email(&input.email).await? {
            // Legacy account logging in through the identity provider for the
            // first time: back-fill the identity id.
            let patch = UserPatch {
                clerk_id: Some(input.clerk_id),
                fullname: non_empty(input.name),
                email: None,
                image: input.image,
            };
            self.repo.update(user.id, &patch).await?;
            return self
                .repo
                .find_by_id(user.id)
                .await?
                .ok_or(ApiServiceError::UserNotFound);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            clerk_id: Some(input.clerk_id),
            fullname: input.name,
            email: input.email,
            image: input.image,
            password: CLERK_AUTH_PASSWORD.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

pub struct UpdateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub async fn execute(
        &self,
        clerk_id: &str,
        input: UpdateUserInput,
    ) -> Result<User, ApiServiceError> {
        let user = self
            .repo
            .find_by_clerk_id(clerk_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        let patch = UserPatch {
            clerk_id: None,
            fullname: input.name.and_then(non_empty),
            email: input.email.and_then(non_empty),
            image: input.image.and_then(non_empty),
        };
        self.repo.update(user.id, &patch).await?;
        self.repo
            .find_by_id(user.id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}

// ── DeleteUser (cascading) ───────────────────────────────────────────────────

/// Remove a user and everything hanging off them: for each owned event, its
/// bookings then the event; then the user's own bookings; then the user row.
/// Not transactional: a failure mid-way can leave orphaned rows, an accepted
/// limitation.
pub(crate) async fn delete_user_cascade<U, E, B>(
    users: &U,
    events: &E,
    bookings: &B,
    user_id: Uuid,
) -> Result<(), ApiServiceError>
where
    U: UserRepository,
    E: EventRepository,
    B: BookingRepository,
{
    for event in events.list_by_owner(user_id).await? {
        for booking in bookings.list_by_event(event.id).await? {
            bookings.delete(booking.id).await?;
        }
        events.delete(event.id).await?;
    }
    for booking in bookings.list_by_user(user_id).await? {
        bookings.delete(booking.id).await?;
    }
    users.delete(user_id).await
}

pub struct DeleteUserUseCase<U: UserRepository, E: EventRepository, B: BookingRepository> {
    pub users: U,
    pub events: E,
    pub bookings: B,
}

impl<U: UserRepository, E: EventRepository, B: BookingRepository> DeleteUserUseCase<U, E, B> {
    pub async fn execute(&self, clerk_id: &str) -> Result<(), ApiServiceError> {
        let user = self
            .users
            .find_by_clerk_id(clerk_id)
            .await?
            .ok_or(ApiServiceError::UserNotFound)?;
        delete_user_cascade(&self.users, &self.events, &self.bookings, user.id).await
    }
}

// ── GetUserByClerkId / GetUserByEmail ────────────────────────────────────────

pub struct GetUserByClerkIdUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserByClerkIdUseCase<R> {
    /// An empty lookup key resolves to nothing rather than erroring.
    pub async fn execute(&self, clerk_id: &str) -> Result<Option<User>, ApiServiceError> {
        if clerk_id.is_empty() {
            return Ok(None);
        }
        self.repo.find_by_clerk_id(clerk_id).await
    }
}

pub struct GetUserByEmailUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserByEmailUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        if email.is_empty() {
            return Ok(None);
        }
        self.repo.find_by_email(email).await
    }
}

// ── GetOrCreateUser ──────────────────────────────────────────────────────────

pub struct GetOrCreateUserInput {
    pub clerk_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

pub struct GetOrCreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetOrCreateUserUseCase<R> {
    pub async fn execute(
        &self,
        input: GetOrCreateUserInput,
    ) -> Result<Option<User>, ApiServiceError> {
        if input.clerk_id.is_none() && input.email.is_none() {
            return Ok(None);
        }

        let mut user = None;
        if let Some(ref clerk_id) = input.clerk_id {
            user = self.repo.find_by_clerk_id(clerk_id).await?;
        }
        if user.is_none() {
            if let Some(ref email) = input.email {
                user = self.repo.find_by_email(email).await?;
            }
        }

        if let Some(mut user) = user {
            // Back-fill the identity id on a legacy record.
            if user.clerk_id.is_none() && input.clerk_id.is_some() {
                let patch = UserPatch {
                    clerk_id: input.clerk_id.clone(),
                    ..Default::default()
                };
                self.repo.update(user.id, &patch).await?;
                user.clerk_id = input.clerk_id;
            }
            return Ok(Some(user));
        }

        let (Some(clerk_id), Some(email)) = (input.clerk_id, input.email) else {
            return Ok(None);
        };
        let fullname = input
            .name
            .and_then(non_empty)
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_owned());
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            clerk_id: Some(clerk_id),
            fullname,
            email,
            image: input.image,
            password: CLERK_AUTH_PASSWORD.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(Some(user))
    }
}

// ── RegisterUser (legacy email/password) ─────────────────────────────────────

pub struct RegisterUserInput {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ApiServiceError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(ApiServiceError::EmailTaken);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            clerk_id: None,
            fullname: input.fullname,
            email: input.email,
            image: None,
            password: input.password,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── LoginUser (legacy email/password) ────────────────────────────────────────

pub struct LoginUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LoginUserUseCase<R> {
    /// Resolves to `None` on unknown email or password mismatch; the legacy
    /// flow reports failure in-band rather than as an error.
    pub async fn execute(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, ApiServiceError> {
        let user = self.repo.find_by_email(email).await?;
        Ok(user.filter(|u| u.password == password))
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiServiceError> {
        self.repo.list_all().await
    }
}
