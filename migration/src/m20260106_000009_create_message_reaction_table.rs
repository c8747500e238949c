use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_profile_table::Profile;
use super::m20260106_000008_create_message_table::Message;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageReaction::Table)
                    .if_not_exists()
                    .col(pk_uuid(MessageReaction::Id))
                    .col(uuid(MessageReaction::MessageId))
                    .col(uuid(MessageReaction::ProfileId))
                    .col(string(MessageReaction::Emoji))
                    .col(timestamp_with_time_zone(MessageReaction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_reaction_message_id")
                            .from(MessageReaction::Table, MessageReaction::MessageId)
                            .to(Message::Table, Message::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_reaction_profile_id")
                            .from(MessageReaction::Table, MessageReaction::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_message_reaction_unique")
                            .col(MessageReaction::MessageId)
                            .col(MessageReaction::ProfileId)
                            .col(MessageReaction::Emoji),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageReaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageReaction {
    #[sea_orm(iden = "message_reactions")]
    Table,
    Id,
    MessageId,
    ProfileId,
    Emoji,
    CreatedAt,
}
