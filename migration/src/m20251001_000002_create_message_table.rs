use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(string_len(Message::Name, 50))
                    .col(string_len(Message::Email, 120))
                    .col(string_len(Message::Subject, 100))
                    .col(text(Message::Message))
                    .col(
                        timestamp_with_time_zone(Message::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Message {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    Timestamp,
}
