use super::*;

/// Tests removing one profile's reaction.
///
/// Expected: Ok(true) for the caller's reaction, other profiles' reactions untouched
#[tokio::test]
async fn removes_only_own_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _, channel) =
        factory::helpers::create_channel_with_dependencies(db).await?;
    let (other, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let message = factory::create_message(db, channel.id, owner.id).await?;
    factory::create_reaction(db, message.id, owner.id, "👍").await?;
    factory::create_reaction(db, message.id, other.id, "👍").await?;

    let repo = MessageReactionRepository::new(db);

    assert!(repo.delete(message.id, owner.id, "👍").await?);
    assert!(!repo.delete(message.id, owner.id, "👍").await?);
    assert!(repo.exists(message.id, other.id, "👍").await?);

    Ok(())
}
