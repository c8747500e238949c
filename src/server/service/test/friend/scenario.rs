use super::*;
use crate::server::model::friendship::FriendshipStatus;

/// Tests the full request and accept flow between two profiles.
///
/// Expected: A's self-accept is denied, B's accept succeeds and is repeatable, and both
/// friend lists contain the other exactly once
#[tokio::test]
async fn request_then_accept() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_profile(db).await?;
    let b = factory::create_profile(db).await?;
    let service = FriendService::new(db);

    let request = service.send_request(a.id, b.id).await?;
    assert_eq!(request.status, FriendshipStatus::Pending);

    let pending = service.pending(b.id).await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].sender.id, a.id);
    assert!(service.pending(a.id).await?.is_empty());

    let err = service.accept(a.id, request.id).await.unwrap_err();
    assert!(denial_reason(&err).is_some());

    let accepted = service.accept(b.id, request.id).await?;
    assert_eq!(accepted.status, FriendshipStatus::Accepted);
    let again = service.accept(b.id, request.id).await?;
    assert_eq!(again.status, FriendshipStatus::Accepted);

    let a_friends = service.friends(a.id).await?;
    let b_friends = service.friends(b.id).await?;
    assert_eq!(
        a_friends.iter().map(|f| f.profile.id).collect::<Vec<_>>(),
        vec![b.id]
    );
    assert_eq!(
        b_friends.iter().map(|f| f.profile.id).collect::<Vec<_>>(),
        vec![a.id]
    );
    assert_eq!(a_friends[0].friendship_id, request.id);
    assert!(service.pending(b.id).await?.is_empty());

    Ok(())
}
