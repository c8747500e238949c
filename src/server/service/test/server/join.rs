use super::*;

/// Tests joining through an invite code.
///
/// Expected: Ok(Server) and the new member holds every default role
#[tokio::test]
async fn joins_with_default_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db).await?;
    let joiner = factory::create_profile(db).await?;
    let service = ServerService::new(db);
    let server = service.create(owner.id, "Den".to_string(), None).await?;

    let joined = service.join(joiner.id, &server.invite_code).await?;

    assert_eq!(joined.id, server.id);
    let member = ServerMemberRepository::new(db)
        .find(server.id, joiner.id)
        .await?
        .unwrap();
    let roles = ServerRoleRepository::new(db).get_for_member(member.id).await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "Member");

    Ok(())
}

/// Tests joining twice, and the owner joining their own server.
///
/// Expected: Err(AppError::BadRequest("Already a member")) in both cases
#[tokio::test]
async fn rejects_existing_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db).await?;
    let joiner = factory::create_profile(db).await?;
    let service = ServerService::new(db);
    let server = service.create(owner.id, "Den".to_string(), None).await?;
    service.join(joiner.id, &server.invite_code).await?;

    for profile_id in [joiner.id, owner.id] {
        let result = service.join(profile_id, &server.invite_code).await;
        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Already a member"));
    }

    Ok(())
}

/// Tests joining with an unknown invite code.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_invite_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::create_profile(db).await?;

    let result = ServerService::new(db).join(profile.id, "nope1234").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
