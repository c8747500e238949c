use super::*;

/// Tests creating a channel with `can_manage_channels`.
///
/// Expected: Ok(Channel) placed after the last channel with the requested type
#[tokio::test]
async fn appends_channel_after_last_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (manager, manager_member) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let role_id = grant_flag(db, server.id, manager_member.id, "can_manage_channels").await?;
    factory::channel::ChannelFactory::new(db, server.id)
        .position(4)
        .build()
        .await?;

    let channel = ChannelService::new(db)
        .create(
            manager.id,
            ChannelDraft {
                channel_type: Some("voice".to_string()),
                is_private: true,
                allowed_roles: vec![role_id, role_id],
                ..draft(server.id, " lounge ")
            },
        )
        .await?;

    assert_eq!(channel.name, "lounge");
    assert_eq!(channel.channel_type, ChannelType::Voice);
    assert_eq!(channel.position, 5);
    assert!(channel.is_private);
    assert_eq!(channel.allowed_roles, vec![role_id]);

    Ok(())
}

/// Tests the first channel of an empty server.
///
/// Expected: Ok(Channel) at position 0 with the default text type
#[tokio::test]
async fn first_channel_starts_at_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _) = factory::helpers::create_server_with_owner(db).await?;

    let channel = ChannelService::new(db)
        .create(owner.id, draft(server.id, "general"))
        .await?;

    assert_eq!(channel.position, 0);
    assert_eq!(channel.channel_type, ChannelType::Text);

    Ok(())
}

/// Tests validation and authorization failures.
///
/// Expected: plain member denied; blank name, unknown type and foreign roles rejected
#[tokio::test]
async fn rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (_, other_server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (member, _) = factory::helpers::create_profile_in_server(db, server.id).await?;
    let foreign_role = factory::create_role(db, other_server.id).await?;
    let service = ChannelService::new(db);

    let err = service
        .create(member.id, draft(server.id, "nope"))
        .await
        .unwrap_err();
    assert_eq!(
        denial_reason(&err),
        Some("Missing permission: can_manage_channels")
    );

    let invalid = [
        draft(server.id, "  "),
        ChannelDraft {
            channel_type: Some("stage".to_string()),
            ..draft(server.id, "stage")
        },
        ChannelDraft {
            is_private: true,
            allowed_roles: vec![foreign_role.id],
            ..draft(server.id, "staff")
        },
    ];

    for draft in invalid {
        let result = service.create(owner.id, draft).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    Ok(())
}
