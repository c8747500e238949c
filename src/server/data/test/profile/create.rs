use super::*;

/// Tests creating a profile for a new identity.
///
/// Verifies that the profile keeps the identity link and starts offline.
///
/// Expected: Ok(Profile) with status "offline"
#[tokio::test]
async fn creates_profile_with_offline_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let profile = repo
        .create(CreateProfileParams {
            user_id: "auth-fox".to_string(),
            username: "fox".to_string(),
            display_name: "fox".to_string(),
        })
        .await?;

    assert_eq!(profile.user_id, "auth-fox");
    assert_eq!(profile.username, "fox");
    assert_eq!(profile.status, "offline");
    assert!(profile.avatar_url.is_none());

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_profile_named(db, "fox").await?;

    let repo = ProfileRepository::new(db);
    let result = repo
        .create(CreateProfileParams {
            user_id: "auth-other".to_string(),
            username: "fox".to_string(),
            display_name: "fox".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(crate::server::data::is_unique_violation(
        &result.unwrap_err()
    ));

    Ok(())
}
