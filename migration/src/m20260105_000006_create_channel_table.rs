use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Channel::Table)
                    .if_not_exists()
                    .col(pk_uuid(Channel::Id))
                    .col(uuid(Channel::ServerId))
                    .col(string(Channel::Name))
                    .col(string(Channel::Type).default("text"))
                    .col(integer(Channel::Position))
                    .col(boolean(Channel::IsPrivate).default(false))
                    .col(json(Channel::AllowedRoles))
                    .col(timestamp_with_time_zone(Channel::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_server_id")
                            .from(Channel::Table, Channel::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Channel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Channel {
    #[sea_orm(iden = "channels")]
    Table,
    Id,
    ServerId,
    Name,
    Type,
    Position,
    IsPrivate,
    AllowedRoles,
    CreatedAt,
}
