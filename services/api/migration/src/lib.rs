use sea_orm_migration::prelude::*;

mod m20260401_000001_create_users;
mod m20260401_000002_create_events;
mod m20260401_000003_create_bookings;
mod m20260401_000004_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_users::Migration),
            Box::new(m20260401_000002_create_events::Migration),
            Box::new(m20260401_000003_create_bookings::Migration),
            Box::new(m20260401_000004_add_lookup_indexes::Migration),
        ]
    }
}
