use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::ClerkId)
                    .name("idx_users_clerk_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::Email)
                    .name("idx_users_email")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Events::Table)
                    .col(Events::UserId)
                    .name("idx_events_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Bookings::Table)
                    .col(Bookings::UserId)
                    .name("idx_bookings_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Bookings::Table)
                    .col(Bookings::EventId)
                    .name("idx_bookings_event_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Bookings::Table)
                    .col(Bookings::TicketCode)
                    .name("idx_bookings_ticket_code")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_ticket_code").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_event_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_events_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_email").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_clerk_id").to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    ClerkId,
    Email,
}

#[derive(Iden)]
enum Events {
    Table,
    UserId,
}

#[derive(Iden)]
enum Bookings {
    Table,
    UserId,
    EventId,
    TicketCode,
}
