pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_profile_table;
mod m20260105_000002_create_server_table;
mod m20260105_000003_create_server_member_table;
mod m20260105_000004_create_server_role_table;
mod m20260105_000005_create_member_role_table;
mod m20260105_000006_create_channel_table;
mod m20260106_000007_create_friendship_table;
mod m20260106_000008_create_message_table;
mod m20260106_000009_create_message_reaction_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_profile_table::Migration),
            Box::new(m20260105_000002_create_server_table::Migration),
            Box::new(m20260105_000003_create_server_member_table::Migration),
            Box::new(m20260105_000004_create_server_role_table::Migration),
            Box::new(m20260105_000005_create_member_role_table::Migration),
            Box::new(m20260105_000006_create_channel_table::Migration),
            Box::new(m20260106_000007_create_friendship_table::Migration),
            Box::new(m20260106_000008_create_message_table::Migration),
            Box::new(m20260106_000009_create_message_reaction_table::Migration),
        ]
    }
}
