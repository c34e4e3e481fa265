#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Booking, Event, EventChanges, User, UserPatch};
use crate::error::ApiServiceError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiServiceError>;

    /// Lookup by external identity id. Indexed, but uniqueness is only
    /// enforced here, not by the schema.
    async fn find_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>, ApiServiceError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError>;

    /// All users, newest first.
    async fn list_all(&self) -> Result<Vec<User>, ApiServiceError>;

    async fn create(&self, user: &User) -> Result<(), ApiServiceError>;

    /// Apply a partial update; `None` fields keep stored values. Bumps
    /// `updated_at`.
    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiServiceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError>;
}

/// Repository for event listings.
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, ApiServiceError>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, ApiServiceError>;

    /// Events owned by one user, newest first.
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Event>, ApiServiceError>;

    /// All events, newest first.
    async fn list_all(&self) -> Result<Vec<Event>, ApiServiceError>;

    async fn create(&self, event: &Event) -> Result<(), ApiServiceError>;

    /// Replace the mutable fields and bump `updated_at`.
    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<(), ApiServiceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError>;
}

/// Repository for bookings.
pub trait BookingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, ApiServiceError>;

    /// The booking for an exact (user, event) pair, if any.
    async fn find_for_user_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<Booking>, ApiServiceError>;

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, ApiServiceError>;

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Booking>, ApiServiceError>;

    async fn list_all(&self) -> Result<Vec<Booking>, ApiServiceError>;

    async fn create(&self, booking: &Booking) -> Result<(), ApiServiceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ApiServiceError>;
}

/// Port for minting upload URLs and resolving stored image references to
/// serving URLs. Upload mechanics themselves are out of scope.
pub trait StoragePort: Send + Sync {
    /// Mint a fresh opaque upload URL.
    fn new_upload_url(&self) -> String;

    /// Resolve a stored image reference. Absolute URLs pass through.
    fn serving_url(&self, image: &str) -> String;
}
