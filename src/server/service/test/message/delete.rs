use super::*;

/// Tests the author deleting their own message, twice.
///
/// Expected: Ok(Message) with placeholder content, no attachments and the deleted flag;
/// the second delete succeeds without change
#[tokio::test]
async fn author_soft_deletes_own_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (author, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let message = factory::create_message(db, channel.id, author.id).await?;
    let service = MessageService::new(db);

    let deleted = service.delete(author.id, message.id).await?;

    assert!(deleted.is_deleted);
    assert_eq!(deleted.content, DELETED_MESSAGE_CONTENT);
    assert!(deleted.attachments.is_empty());

    let again = service.delete(author.id, message.id).await?;
    assert_eq!(again.id, deleted.id);
    assert!(again.is_deleted);
    assert_eq!(again.content, DELETED_MESSAGE_CONTENT);

    Ok(())
}

/// Tests deleting someone else's message.
///
/// Expected: plain member denied; owner and `can_manage_messages` holder succeed
#[tokio::test]
async fn others_need_manage_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let (author, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let (bystander, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let (moderator, moderator_member) =
        factory::helpers::create_profile_in_server(db, server.id).await?;
    grant_flag(db, server.id, moderator_member.id, "can_manage_messages").await?;
    let first = factory::create_message(db, channel.id, author.id).await?;
    let second = factory::create_message(db, channel.id, author.id).await?;
    let service = MessageService::new(db);

    let err = service.delete(bystander.id, first.id).await.unwrap_err();
    assert_eq!(
        denial_reason(&err),
        Some("Missing permission: can_manage_messages")
    );

    assert!(service.delete(moderator.id, first.id).await?.is_deleted);
    assert!(service.delete(owner.id, second.id).await?.is_deleted);

    let result = service.delete(owner.id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
