use super::*;

/// Tests storing a pending request.
///
/// Expected: Ok(Friendship) pending from requester to recipient
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_profile(db).await?;
    let b = factory::create_profile(db).await?;

    let repo = FriendshipRepository::new(db);
    let friendship = repo.create(a.id, b.id).await?;

    assert_eq!(friendship.requester_id, a.id);
    assert_eq!(friendship.recipient_id, b.id);
    assert_eq!(friendship.status, FriendshipStatus::Pending);

    Ok(())
}

/// Tests that the reversed pair is rejected by the store.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_reversed_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_profile(db).await?;
    let b = factory::create_profile(db).await?;

    let repo = FriendshipRepository::new(db);
    repo.create(a.id, b.id).await?;
    let result = repo.create(b.id, a.id).await;

    assert!(result.is_err());
    assert!(crate::server::data::is_unique_violation(
        &result.unwrap_err()
    ));

    Ok(())
}
