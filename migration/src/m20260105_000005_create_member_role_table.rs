use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_server_member_table::ServerMember;
use super::m20260105_000004_create_server_role_table::ServerRole;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberRole::Table)
                    .if_not_exists()
                    .col(pk_uuid(MemberRole::Id))
                    .col(uuid(MemberRole::MemberId))
                    .col(uuid(MemberRole::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_role_member_id")
                            .from(MemberRole::Table, MemberRole::MemberId)
                            .to(ServerMember::Table, ServerMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_role_role_id")
                            .from(MemberRole::Table, MemberRole::RoleId)
                            .to(ServerRole::Table, ServerRole::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_member_role_unique")
                            .col(MemberRole::MemberId)
                            .col(MemberRole::RoleId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberRole {
    #[sea_orm(iden = "member_roles")]
    Table,
    Id,
    MemberId,
    RoleId,
}
