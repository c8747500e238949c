use super::*;

/// Tests resolving an identity provider user id to its profile.
///
/// Expected: Ok(Some(Profile)) for the linked id, Ok(None) otherwise
#[tokio::test]
async fn finds_profile_linked_to_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::ProfileFactory::new(db)
        .user_id("auth-123")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);

    let found = repo.find_by_user_id("auth-123").await?;
    assert_eq!(found.map(|p| p.id), Some(profile.id));

    let missing = repo.find_by_user_id("auth-404").await?;
    assert!(missing.is_none());

    Ok(())
}
