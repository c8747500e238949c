use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_uuid(Profile::Id))
                    .col(string_uniq(Profile::UserId))
                    .col(string_uniq(Profile::Username))
                    .col(string(Profile::DisplayName))
                    .col(string_null(Profile::AvatarUrl))
                    .col(string(Profile::Status).default("offline"))
                    .col(timestamp_with_time_zone(Profile::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    #[sea_orm(iden = "profiles")]
    Table,
    Id,
    UserId,
    Username,
    DisplayName,
    AvatarUrl,
    Status,
    CreatedAt,
}
