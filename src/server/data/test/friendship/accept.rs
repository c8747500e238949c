use super::*;

/// Tests accepting a pending request.
///
/// Expected: Ok(Friendship) with accepted status and unchanged parties
#[tokio::test]
async fn marks_request_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_profile(db).await?;
    let b = factory::create_profile(db).await?;
    let pending = factory::create_friendship(db, a.id, b.id).await?;

    let repo = FriendshipRepository::new(db);
    let accepted = repo.accept(pending.id).await?;

    assert_eq!(accepted.status, FriendshipStatus::Accepted);
    assert_eq!(accepted.requester_id, a.id);
    assert_eq!(accepted.recipient_id, b.id);

    let stored = repo.find_by_id(pending.id).await?.unwrap();
    assert_eq!(stored.status, FriendshipStatus::Accepted);

    Ok(())
}
