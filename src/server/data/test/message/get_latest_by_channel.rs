use super::*;

/// Tests that messages come back oldest first.
///
/// Expected: Ok(Vec<Message>) in ascending creation order
#[tokio::test]
async fn returns_messages_in_ascending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let now = Utc::now();
    for (content, minutes_ago) in [("second", 5), ("third", 1), ("first", 10)] {
        factory::message::MessageFactory::new(db, channel.id, owner.id)
            .content(content)
            .created_at(now - Duration::minutes(minutes_ago))
            .build()
            .await?;
    }

    let repo = MessageRepository::new(db);
    let contents: Vec<_> = repo
        .get_latest_by_channel(channel.id, 100)
        .await?
        .into_iter()
        .map(|m| m.content)
        .collect();

    assert_eq!(contents, vec!["first", "second", "third"]);

    Ok(())
}

/// Tests that the limit keeps the newest messages.
///
/// Expected: Ok(Vec<Message>) with the two most recent messages, oldest first
#[tokio::test]
async fn limit_keeps_newest_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let now = Utc::now();
    for i in 0..5 {
        factory::message::MessageFactory::new(db, channel.id, owner.id)
            .content(format!("m{}", i))
            .created_at(now - Duration::minutes(10 - i))
            .build()
            .await?;
    }

    let repo = MessageRepository::new(db);
    let contents: Vec<_> = repo
        .get_latest_by_channel(channel.id, 2)
        .await?
        .into_iter()
        .map(|m| m.content)
        .collect();

    assert_eq!(contents, vec!["m3", "m4"]);

    Ok(())
}

/// Tests that other channels' messages are excluded.
///
/// Expected: Ok(empty Vec) for a channel without messages
#[tokio::test]
async fn excludes_other_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _, channel) =
        factory::helpers::create_channel_with_dependencies(db).await?;
    let quiet = factory::create_channel(db, server.id).await?;
    factory::create_message(db, channel.id, owner.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_latest_by_channel(quiet.id, 100).await?;

    assert!(messages.is_empty());

    Ok(())
}
