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
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(pk_uuid(Friendship::Id))
                    .col(uuid(Friendship::UserId1))
                    .col(uuid(Friendship::UserId2))
                    // Sorted "a:b" of both profile ids, one row per unordered pair
                    .col(string_uniq(Friendship::PairKey))
                    .col(string(Friendship::Status).default("pending"))
                    .col(timestamp_with_time_zone(Friendship::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_user_id1")
                            .from(Friendship::Table, Friendship::UserId1)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_user_id2")
                            .from(Friendship::Table, Friendship::UserId2)
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
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendship {
    #[sea_orm(iden = "friendships")]
    Table,
    Id,
    UserId1,
    UserId2,
    PairKey,
    Status,
    CreatedAt,
}
