use super::*;

/// Tests listing accepted friendships from both sides.
///
/// Expected: Ok(Vec<Friendship>) with accepted rows where the profile is either party
#[tokio::test]
async fn lists_accepted_friendships_on_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_profile(db).await?;
    let sent = factory::create_profile(db).await?;
    let received = factory::create_profile(db).await?;
    let pending = factory::create_profile(db).await?;

    let outgoing = factory::friendship::FriendshipFactory::new(db, me.id, sent.id)
        .accepted()
        .build()
        .await?;
    let incoming = factory::friendship::FriendshipFactory::new(db, received.id, me.id)
        .accepted()
        .build()
        .await?;
    factory::create_friendship(db, pending.id, me.id).await?;

    let repo = FriendshipRepository::new(db);
    let ids: Vec<_> = repo
        .get_accepted_for(me.id)
        .await?
        .into_iter()
        .map(|f| f.id)
        .collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&outgoing.id));
    assert!(ids.contains(&incoming.id));

    Ok(())
}
