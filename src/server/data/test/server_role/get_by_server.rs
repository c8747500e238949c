use super::*;

/// Tests that server roles are ordered by position, highest first.
///
/// Expected: Ok(Vec<ServerRole>) ordered by descending position
#[tokio::test]
async fn orders_roles_by_position_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    for (name, position) in [("Member", 0), ("Admin", 2), ("Moderator", 1)] {
        factory::server_role::ServerRoleFactory::new(db, server.id)
            .name(name)
            .position(position)
            .build()
            .await?;
    }
    let (_, other_server, _) = factory::helpers::create_server_with_owner(db).await?;
    factory::create_role(db, other_server.id).await?;

    let repo = ServerRoleRepository::new(db);
    let names: Vec<_> = repo
        .get_by_server(server.id)
        .await?
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, vec!["Admin", "Moderator", "Member"]);

    Ok(())
}

/// Tests counting role ids that belong to a server.
///
/// Expected: Ok(count) excluding roles of other servers and unknown ids
#[tokio::test]
async fn counts_only_roles_of_the_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, server, _) = factory::helpers::create_server_with_owner(db).await?;
    let (_, other_server, _) = factory::helpers::create_server_with_owner(db).await?;
    let own = factory::create_role(db, server.id).await?;
    let foreign = factory::create_role(db, other_server.id).await?;

    let repo = ServerRoleRepository::new(db);
    let count = repo
        .count_in_server(server.id, &[own.id, foreign.id, uuid::Uuid::new_v4()])
        .await?;

    assert_eq!(count, 1);
    assert_eq!(repo.count_in_server(server.id, &[]).await?, 0);

    Ok(())
}
