use super::*;

/// Tests storing a reaction.
///
/// Expected: Ok(Reaction) and exists() reports it
#[tokio::test]
async fn creates_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let message = factory::create_message(db, channel.id, owner.id).await?;

    let repo = MessageReactionRepository::new(db);
    assert!(!repo.exists(message.id, owner.id, "🎉").await?);

    let reaction = repo.create(message.id, owner.id, "🎉").await?;

    assert_eq!(reaction.message_id, message.id);
    assert_eq!(reaction.profile_id, owner.id);
    assert_eq!(reaction.emoji, "🎉");
    assert!(repo.exists(message.id, owner.id, "🎉").await?);
    assert!(!repo.exists(message.id, owner.id, "👍").await?);

    Ok(())
}
