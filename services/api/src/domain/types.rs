use chrono::{DateTime, Utc};
use rand::RngExt;
use uuid::Uuid;

/// User account. `clerk_id` is the external identity-provider id; legacy
/// accounts registered by email/password have none until a sync back-fills it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub clerk_id: Option<String>,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a user row. `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub clerk_id: Option<String>,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// An event listing. `price` absent means free.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of an event's mutable fields, as submitted by the owner.
#[derive(Debug, Clone)]
pub struct EventChanges {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub category: String,
    pub image: Option<String>,
}

/// A booking of one event by one user.
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub ticket_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const TICKET_CODE_LEN: usize = 8;

const TICKET_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a ticket code: 8 random characters from `A-Z0-9`.
///
/// Collisions are not checked; the code is a human-readable reference, not a
/// key.
pub fn generate_ticket_code() -> String {
    let mut rng = rand::rng();
    (0..TICKET_CODE_LEN)
        .map(|_| TICKET_CODE_CHARSET[rng.random_range(0..TICKET_CODE_CHARSET.len())] as char)
        .collect()
}
