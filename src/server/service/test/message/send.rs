use super::*;

/// Tests sending a message that mentions the assistant.
///
/// Expected: Ok(SentMessage) with the author attached and an auto-reply job carrying the
/// original content
#[tokio::test]
async fn mention_produces_auto_reply_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let author = Profile::from_entity(owner);

    let sent = MessageService::new(db)
        .send(&author, draft(channel.id, "hello @AI how are you"))
        .await?;

    assert_eq!(sent.message.message.content, "hello @AI how are you");
    assert_eq!(sent.message.author.as_ref(), Some(&author));
    let job = sent.auto_reply.unwrap();
    assert_eq!(job.channel_id, channel.id);
    assert_eq!(job.content, "hello @AI how are you");

    let plain = MessageService::new(db)
        .send(&author, draft(channel.id, "hello air"))
        .await?;
    assert!(plain.auto_reply.is_none());

    Ok(())
}

/// Tests a reply with an attachment.
///
/// Expected: Ok(SentMessage) keeping the reply target and the attachment
#[tokio::test]
async fn stores_reply_and_attachment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let target = factory::create_message(db, channel.id, owner.id).await?;
    let author = Profile::from_entity(owner);

    let sent = MessageService::new(db)
        .send(
            &author,
            MessageDraft {
                reply_to_id: Some(target.id),
                attachments: vec![AttachmentDto {
                    url: "https://blobs.test/uploads/a.png".to_string(),
                    name: "a.png".to_string(),
                    kind: "image".to_string(),
                    size: 42,
                }],
                ..draft(channel.id, "")
            },
        )
        .await?;

    let stored = MessageRepository::new(db)
        .find_by_id(sent.message.message.id)
        .await?
        .unwrap();
    assert_eq!(stored.reply_to_id, Some(target.id));
    assert_eq!(stored.attachments.len(), 1);
    assert_eq!(stored.attachments[0].size, 42);

    Ok(())
}

/// Tests invalid messages.
///
/// Expected: Err(AppError::BadRequest) for empty content, an unknown attachment type and a
/// reply target in another channel
#[tokio::test]
async fn rejects_invalid_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let other_channel = factory::create_channel(db, server.id).await?;
    let elsewhere = factory::create_message(db, other_channel.id, owner.id).await?;
    let author = Profile::from_entity(owner);
    let service = MessageService::new(db);

    let invalid = [
        draft(channel.id, "   "),
        MessageDraft {
            attachments: vec![AttachmentDto {
                url: "https://blobs.test/x".to_string(),
                name: "x".to_string(),
                kind: "video".to_string(),
                size: 1,
            }],
            ..draft(channel.id, "look")
        },
        MessageDraft {
            reply_to_id: Some(elsewhere.id),
            ..draft(channel.id, "re")
        },
        MessageDraft {
            reply_to_id: Some(Uuid::new_v4()),
            ..draft(channel.id, "re")
        },
    ];

    for draft in invalid {
        let result = service.send(&author, draft).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}

/// Tests sending into a server the author has not joined.
///
/// Expected: Err(AccessDenied("Not a member"))
#[tokio::test]
async fn outsider_cannot_send() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let outsider = Profile::from_entity(factory::create_profile(db).await?);

    let err = MessageService::new(db)
        .send(&outsider, draft(channel.id, "hi"))
        .await
        .unwrap_err();

    assert_eq!(denial_reason(&err), Some("Not a member"));

    Ok(())
}
