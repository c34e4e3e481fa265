use sea_orm::DatabaseConnection;

use crate::infra::db::{DbBookingRepository, DbEventRepository, DbUserRepository};
use crate::infra::storage::BaseUrlStorage;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub public_base_url: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn booking_repo(&self) -> DbBookingRepository {
        DbBookingRepository {
            db: self.db.clone(),
        }
    }

    pub fn storage(&self) -> BaseUrlStorage {
        BaseUrlStorage {
            base_url: self.public_base_url.clone(),
        }
    }
}
