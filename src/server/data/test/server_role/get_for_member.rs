use super::*;

/// Tests loading the roles held by a membership.
///
/// Expected: Ok(Vec<ServerRole>) with assigned roles only
#[tokio::test]
async fn returns_only_assigned_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (_, member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let kicker =
        factory::server_role::create_role_with_flag(db, server.id, "can_kick_members").await?;
    let plain = factory::create_role(db, server.id).await?;
    factory::create_role(db, server.id).await?;
    factory::create_member_role(db, member.id, kicker.id).await?;
    factory::create_member_role(db, member.id, plain.id).await?;

    let repo = ServerRoleRepository::new(db);
    let roles = repo.get_for_member(member.id).await?;

    let mut ids: Vec<_> = roles.iter().map(|r| r.id).collect();
    ids.sort();
    let mut expected = vec![kicker.id, plain.id];
    expected.sort();
    assert_eq!(ids, expected);
    assert!(roles
        .iter()
        .any(|r| r.permissions.has(PermissionFlag::KickMembers)));

    Ok(())
}

/// Tests a membership without roles.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_member_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, member) = factory::helpers::create_server_with_owner(db).await?;
    factory::create_role(db, server.id).await?;

    let repo = ServerRoleRepository::new(db);
    let roles = repo.get_for_member(member.id).await?;

    assert!(roles.is_empty());

    Ok(())
}
