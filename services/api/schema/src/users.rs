use sea_orm::entity::prelude::*;

/// User account record.
///
/// `clerk_id` and `email` are indexed but carry no unique constraint;
/// uniqueness is enforced at lookup time by the sync/registration paths.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub clerk_id: Option<String>,
    pub fullname: String,
    pub email: String,
    pub image: Option<String>,
    /// Legacy password field; `"clerk_auth"` placeholder for synced accounts.
    pub password: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
