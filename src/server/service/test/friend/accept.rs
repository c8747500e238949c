use super::*;

/// Tests accepting by someone other than the recipient, and an unknown request.
///
/// Expected: requester and bystander denied, unknown id not found
#[tokio::test]
async fn only_recipient_accepts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_profile(db).await?;
    let b = factory::create_profile(db).await?;
    let c = factory::create_profile(db).await?;
    let request = factory::create_friendship(db, a.id, b.id).await?;
    let service = FriendService::new(db);

    for actor in [a.id, c.id] {
        let err = service.accept(actor, request.id).await.unwrap_err();
        assert_eq!(
            denial_reason(&err),
            Some("Not authorized to accept this request")
        );
    }

    let result = service.accept(b.id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
