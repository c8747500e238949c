use super::*;

/// Tests that deleting a channel removes its messages and their reactions.
///
/// Expected: Ok(()) with no channel, message or reaction rows left
#[tokio::test]
async fn deletes_channel_with_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let message = factory::create_message(db, channel.id, owner.id).await?;
    factory::create_reaction(db, message.id, owner.id, "👍").await?;

    let repo = ChannelRepository::new(db);
    repo.delete(channel.id).await?;

    assert!(repo.find_by_id(channel.id).await?.is_none());
    assert!(entity::prelude::Message::find_by_id(message.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::MessageReaction::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
