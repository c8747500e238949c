use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_profile_table::Profile;
use super::m20260105_000006_create_channel_table::Channel;

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
                    .col(pk_uuid(Message::Id))
                    .col(uuid(Message::ChannelId))
                    .col(uuid(Message::AuthorId))
                    .col(text(Message::Content))
                    .col(uuid_null(Message::ReplyToId))
                    .col(json(Message::Attachments))
                    .col(boolean(Message::IsDeleted).default(false))
                    .col(timestamp_with_time_zone(Message::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_channel_id")
                            .from(Message::Table, Message::ChannelId)
                            .to(Channel::Table, Channel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_author_id")
                            .from(Message::Table, Message::AuthorId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_channel_created_at")
                    .table(Message::Table)
                    .col(Message::ChannelId)
                    .col(Message::CreatedAt)
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
    #[sea_orm(iden = "messages")]
    Table,
    Id,
    ChannelId,
    AuthorId,
    Content,
    ReplyToId,
    Attachments,
    IsDeleted,
    CreatedAt,
}
