use super::*;

/// Tests assigning and removing a role with `can_manage_roles`.
///
/// Expected: assign is idempotent, remove succeeds once and then reports not found
#[tokio::test]
async fn manager_assigns_and_removes_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (manager, manager_member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let (target, target_member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    grant_flag(db, server.id, manager_member.id, "can_manage_roles").await?;
    let role = factory::create_role(db, server.id).await?;
    let service = ServerService::new(db);

    service
        .assign_role(manager.id, server.id, target.id, role.id)
        .await?;
    service
        .assign_role(manager.id, server.id, target.id, role.id)
        .await?;

    let repo = MemberRoleRepository::new(db);
    assert!(repo.exists(target_member.id, role.id).await?);

    service
        .remove_role(manager.id, server.id, target.id, role.id)
        .await?;
    assert!(!repo.exists(target_member.id, role.id).await?);

    let result = service
        .remove_role(manager.id, server.id, target.id, role.id)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests role management without the flag and with a role from another server.
///
/// Expected: denial for a plain member, not found for a foreign role
#[tokio::test]
async fn rejects_unauthorized_or_foreign_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (_, other_server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (member, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let role = factory::create_role(db, server.id).await?;
    let foreign = factory::create_role(db, other_server.id).await?;
    let service = ServerService::new(db);

    let err = service
        .assign_role(member.id, server.id, member.id, role.id)
        .await
        .unwrap_err();
    assert_eq!(denial_reason(&err), Some("Missing permission: can_manage_roles"));

    let result = service
        .assign_role(owner.id, server.id, member.id, foreign.id)
        .await;
    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Role not found"));

    Ok(())
}

/// Tests that only members may list roles.
///
/// Expected: Ok for a member, denial for an outsider
#[tokio::test]
async fn lists_roles_for_members_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (member, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let outsider = factory::create_profile(db).await?;
    factory::create_role(db, server.id).await?;
    let service = ServerService::new(db);

    assert_eq!(service.roles(member.id, server.id).await?.len(), 1);

    let err = service.roles(outsider.id, server.id).await.unwrap_err();
    assert_eq!(denial_reason(&err), Some("Not a member"));

    Ok(())
}
