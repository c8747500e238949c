use super::*;

/// Tests reading a channel's history.
///
/// Expected: messages oldest first, each with its author and reaction counts
#[tokio::test]
async fn lists_messages_with_authors_and_reactions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (member, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let now = Utc::now();

    let first = factory::message::MessageFactory::new(db, channel.id, owner.id)
        .content("first")
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let second = factory::message::MessageFactory::new(db, channel.id, member.id)
        .content("second")
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::create_reaction(db, first.id, owner.id, "👍").await?;
    factory::create_reaction(db, first.id, member.id, "👍").await?;
    factory::create_reaction(db, first.id, member.id, "🎉").await?;

    let messages = MessageService::new(db).list(member.id, channel.id).await?;

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message.id, first.id);
    assert_eq!(messages[1].message.id, second.id);
    assert_eq!(
        messages[0].author.as_ref().map(|a| a.id),
        Some(owner.id)
    );
    let counts: Vec<(&str, u64)> = messages[0]
        .reactions
        .iter()
        .map(|r| (r.emoji.as_str(), r.count))
        .collect();
    assert_eq!(counts, vec![("🎉", 1), ("👍", 2)]);
    assert!(messages[1].reactions.is_empty());

    Ok(())
}

/// Tests reading a private channel without an allowed role.
///
/// Expected: Err(AccessDenied("Channel not accessible"))
#[tokio::test]
async fn hides_private_channel_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (member, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let locked = factory::channel::ChannelFactory::new(db, server.id)
        .private(vec![])
        .build()
        .await?;

    let err = MessageService::new(db)
        .list(member.id, locked.id)
        .await
        .unwrap_err();

    assert_eq!(denial_reason(&err), Some("Channel not accessible"));

    Ok(())
}
