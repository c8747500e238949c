use super::*;

/// Tests finding a membership by server and profile.
///
/// Expected: Ok(Some(ServerMember)) for the member, Ok(None) for an outsider
#[tokio::test]
async fn finds_membership_for_member_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (profile, member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let outsider = factory::create_profile(db).await?;

    let repo = ServerMemberRepository::new(db);

    let found = repo.find(server.id, profile.id).await?;
    assert_eq!(found.map(|m| m.id), Some(member.id));

    assert!(repo.find(server.id, outsider.id).await?.is_none());

    Ok(())
}

/// Tests creating a membership.
///
/// Expected: Ok(ServerMember) that can be found afterwards
#[tokio::test]
async fn creates_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let profile = factory::create_profile(db).await?;

    let repo = ServerMemberRepository::new(db);
    let member = repo.create(server.id, profile.id).await?;

    assert_eq!(member.server_id, server.id);
    assert_eq!(member.profile_id, profile.id);
    assert!(repo.find(server.id, profile.id).await?.is_some());

    Ok(())
}
