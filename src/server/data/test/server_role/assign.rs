use super::*;

/// Tests assigning and removing a role.
///
/// Expected: exists() follows assign and remove; a second remove reports false
#[tokio::test]
async fn assigns_and_removes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (_, member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let role = factory::create_role(db, server.id).await?;

    let repo = MemberRoleRepository::new(db);
    assert!(!repo.exists(member.id, role.id).await?);

    repo.assign(member.id, role.id).await?;
    assert!(repo.exists(member.id, role.id).await?);

    assert!(repo.remove(member.id, role.id).await?);
    assert!(!repo.exists(member.id, role.id).await?);
    assert!(!repo.remove(member.id, role.id).await?);

    Ok(())
}
