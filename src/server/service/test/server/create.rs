use super::*;

/// Tests that a new server is seeded with membership, roles and channels.
///
/// Expected: Ok(Server) with an 8 character invite code, the owner as member, Admin,
/// Moderator and Member roles, and three default channels in order
#[tokio::test]
async fn seeds_new_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db).await?;

    let server = ServerService::new(db)
        .create(owner.id, "  Den  ".to_string(), Some("   ".to_string()))
        .await?;

    assert_eq!(server.name, "Den");
    assert_eq!(server.description, None);
    assert_eq!(server.invite_code.len(), 8);
    assert!(ServerMemberRepository::new(db)
        .find(server.id, owner.id)
        .await?
        .is_some());

    let roles = ServerRoleRepository::new(db).get_by_server(server.id).await?;
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Admin", "Moderator", "Member"]);
    assert!(PermissionFlag::ALL
        .iter()
        .all(|flag| roles[0].permissions.has(*flag)));
    assert!(roles[1].permissions.has(PermissionFlag::KickMembers));
    assert!(!roles[1].permissions.has(PermissionFlag::ManageRoles));
    assert!(roles[2].is_default);

    let channels = ChannelRepository::new(db).get_by_server(server.id).await?;
    let seeded: Vec<(&str, ChannelType)> = channels
        .iter()
        .map(|c| (c.name.as_str(), c.channel_type))
        .collect();
    assert_eq!(
        seeded,
        vec![
            ("general", ChannelType::Text),
            ("announcements", ChannelType::Announcement),
            ("voice-chat", ChannelType::Voice),
        ]
    );

    Ok(())
}

/// Tests rejection of a blank server name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db).await?;

    let result = ServerService::new(db)
        .create(owner.id, "   ".to_string(), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
