use super::*;

/// Tests adding the same reaction twice and then removing it.
///
/// Expected: counts stay at one after the repeat, drop to an empty summary after removal
#[tokio::test]
async fn add_is_idempotent_and_remove_clears() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let message = factory::create_message(db, channel.id, owner.id).await?;
    let service = MessageService::new(db);

    service.add_reaction(owner.id, message.id, "🔥").await?;
    let summary = service.add_reaction(owner.id, message.id, " 🔥 ").await?;

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].emoji, "🔥");
    assert_eq!(summary[0].count, 1);

    let summary = service.remove_reaction(owner.id, message.id, "🔥").await?;
    assert!(summary.is_empty());

    Ok(())
}

/// Tests reaction requests that cannot be served.
///
/// Expected: blank emoji rejected, unknown message not found, outsider denied
#[tokio::test]
async fn rejects_invalid_reactions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _, channel) = factory::helpers::create_channel_with_dependencies(db).await?;
    let outsider = factory::create_profile(db).await?;
    let message = factory::create_message(db, channel.id, owner.id).await?;
    let service = MessageService::new(db);

    let result = service.add_reaction(owner.id, message.id, "  ").await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let result = service.add_reaction(owner.id, Uuid::new_v4(), "👍").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let err = service
        .add_reaction(outsider.id, message.id, "👍")
        .await
        .unwrap_err();
    assert_eq!(denial_reason(&err), Some("Not a member"));

    Ok(())
}
