use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_profile_table::Profile;
use super::m20260105_000002_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerMember::Table)
                    .if_not_exists()
                    .col(pk_uuid(ServerMember::Id))
                    .col(uuid(ServerMember::ServerId))
                    .col(uuid(ServerMember::ProfileId))
                    .col(timestamp_with_time_zone(ServerMember::JoinedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_member_server_id")
                            .from(ServerMember::Table, ServerMember::ServerId)
                            .to(Server::Table, Server::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_member_profile_id")
                            .from(ServerMember::Table, ServerMember::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_server_member_unique")
                            .col(ServerMember::ServerId)
                            .col(ServerMember::ProfileId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerMember {
    #[sea_orm(iden = "server_members")]
    Table,
    Id,
    ServerId,
    ProfileId,
    JoinedAt,
}
