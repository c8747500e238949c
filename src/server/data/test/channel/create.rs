use super::*;

/// Tests creating a private channel restricted to a role.
///
/// Expected: Ok(Channel) carrying the type, privacy flag and allowed roles
#[tokio::test]
async fn creates_private_channel_with_allowed_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let role = factory::create_role(db, server.id).await?;

    let repo = ChannelRepository::new(db);
    let created = repo
        .create(CreateChannelParams {
            server_id: server.id,
            name: "staff".to_string(),
            channel_type: ChannelType::Announcement,
            position: 3,
            is_private: true,
            allowed_roles: vec![role.id],
        })
        .await?;

    let channel = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(channel.name, "staff");
    assert_eq!(channel.channel_type, ChannelType::Announcement);
    assert_eq!(channel.position, 3);
    assert!(channel.is_private);
    assert_eq!(channel.allowed_roles, vec![role.id]);

    Ok(())
}

/// Tests the highest channel position lookup.
///
/// Expected: Ok(None) for an empty server, Ok(Some(max)) otherwise
#[tokio::test]
async fn reports_max_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;

    let repo = ChannelRepository::new(db);
    assert_eq!(repo.max_position(server.id).await?, None);

    for position in [0, 4, 2] {
        factory::channel::ChannelFactory::new(db, server.id)
            .position(position)
            .build()
            .await?;
    }

    assert_eq!(repo.max_position(server.id).await?, Some(4));

    Ok(())
}
