//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner profile, a server they own, and the owner's membership row.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, server, member))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::profile::Model,
        entity::server::Model,
        entity::server_member::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::profile::create_profile(db).await?;
    let server = crate::factory::server::create_server(db, owner.id).await?;
    let member = crate::factory::server_member::create_member(db, server.id, owner.id).await?;

    Ok((owner, server, member))
}

/// Creates a server with its owner and a public text channel.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, server, member, channel))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_channel_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::profile::Model,
        entity::server::Model,
        entity::server_member::Model,
        entity::channel::Model,
    ),
    DbErr,
> {
    let (owner, server, member) = create_server_with_owner(db).await?;
    let channel = crate::factory::channel::create_channel(db, server.id).await?;

    Ok((owner, server, member, channel))
}

/// Creates a profile and joins it to the given server.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Server to join
///
/// # Returns
/// - `Ok((profile, member))` - The new profile and its membership row
/// - `Err(DbErr)` - Database error during creation
pub async fn create_profile_in_server(
    db: &DatabaseConnection,
    server_id: uuid::Uuid,
) -> Result<(entity::profile::Model, entity::server_member::Model), DbErr> {
    let profile = crate::factory::profile::create_profile(db).await?;
    let member = crate::factory::server_member::create_member(db, server_id, profile.id).await?;

    Ok((profile, member))
}
