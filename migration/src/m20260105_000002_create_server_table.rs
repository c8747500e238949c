use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_uuid(Server::Id))
                    .col(uuid(Server::OwnerId))
                    .col(string(Server::Name))
                    .col(string_null(Server::Description))
                    .col(string_uniq(Server::InviteCode))
                    .col(timestamp_with_time_zone(Server::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_owner_id")
                            .from(Server::Table, Server::OwnerId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    #[sea_orm(iden = "servers")]
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    InviteCode,
    CreatedAt,
}
