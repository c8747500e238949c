use super::*;

/// Tests listing channels of a server ordered by position.
///
/// Expected: Ok(Vec<Channel>) ascending by position, other servers excluded
#[tokio::test]
async fn lists_server_channels_by_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    for (name, position) in [("voice-chat", 2), ("general", 0), ("announcements", 1)] {
        factory::channel::ChannelFactory::new(db, server.id)
            .name(name)
            .position(position)
            .build()
            .await?;
    }
    factory::helpers::create_channel_with_dependencies(db).await?;

    let repo = ChannelRepository::new(db);
    let names: Vec<_> = repo
        .get_by_server(server.id)
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["general", "announcements", "voice-chat"]);

    Ok(())
}
