use super::*;

/// Tests looking a server up by invite code.
///
/// Expected: Ok(Some(Server)) for a known code, Ok(None) for an unknown one
#[tokio::test]
async fn finds_server_by_invite_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_profile(db).await?;
    let server = factory::server::ServerFactory::new(db, owner.id)
        .invite_code("Ab3dEf9h")
        .build()
        .await?;

    let repo = ServerRepository::new(db);

    let found = repo.find_by_invite_code("Ab3dEf9h").await?;
    assert_eq!(found.map(|s| s.id), Some(server.id));
    assert!(repo.invite_code_exists("Ab3dEf9h").await?);

    assert!(repo.find_by_invite_code("zzzzzzzz").await?.is_none());
    assert!(!repo.invite_code_exists("zzzzzzzz").await?);

    Ok(())
}
