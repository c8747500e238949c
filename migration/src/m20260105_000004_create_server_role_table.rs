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
                    .table(ServerRole::Table)
                    .if_not_exists()
                    .col(pk_uuid(ServerRole::Id))
                    .col(uuid(ServerRole::ServerId))
                    .col(string(ServerRole::Name))
                    .col(string(ServerRole::Color))
                    .col(integer(ServerRole::Position))
                    .col(json(ServerRole::Permissions))
                    .col(boolean(ServerRole::IsDefault).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_role_server_id")
                            .from(ServerRole::Table, ServerRole::ServerId)
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
            .drop_table(Table::drop().table(ServerRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerRole {
    #[sea_orm(iden = "server_roles")]
    Table,
    Id,
    ServerId,
    Name,
    Color,
    Position,
    Permissions,
    IsDefault,
}
