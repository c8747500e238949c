use super::*;

/// Tests that search matches on username or display name.
///
/// Expected: Ok(Vec<Profile>) with both matching profiles and nothing else
#[tokio::test]
async fn matches_username_or_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_username = factory::profile::ProfileFactory::new(db)
        .username("redfox")
        .display_name("Red")
        .build()
        .await?;
    let by_display_name = factory::profile::ProfileFactory::new(db)
        .username("arctic")
        .display_name("Arctic fox")
        .build()
        .await?;
    factory::profile::ProfileFactory::new(db)
        .username("wolf")
        .display_name("Grey wolf")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let results = repo.search("fox", 10).await?;

    let mut ids: Vec<_> = results.iter().map(|p| p.id).collect();
    ids.sort();
    let mut expected = vec![by_username.id, by_display_name.id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests that search honours the result limit.
///
/// Expected: Ok(Vec<Profile>) with exactly `limit` entries
#[tokio::test]
async fn limits_result_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for i in 0..12 {
        factory::profile::create_profile_named(db, format!("kit{}", i)).await?;
    }

    let repo = ProfileRepository::new(db);
    let results = repo.search("kit", 10).await?;

    assert_eq!(results.len(), 10);

    Ok(())
}

/// Tests searching with no matches.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_profile_named(db, "fox").await?;

    let repo = ProfileRepository::new(db);
    let results = repo.search("badger", 10).await?;

    assert!(results.is_empty());

    Ok(())
}

/// Tests that search ignores letter case in both the query and the stored names.
///
/// Expected: Ok(Vec<Profile>) with the profile whether queried in upper or mixed case
#[tokio::test]
async fn ignores_letter_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::ProfileFactory::new(db)
        .username("redfox")
        .display_name("Ember")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);

    for query in ["Fox", "REDFOX", "eMbEr"] {
        let results = repo.search(query, 10).await?;
        assert_eq!(
            results.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![profile.id],
            "query {}",
            query
        );
    }

    Ok(())
}

/// Tests that `%` and `_` in the query are matched literally.
///
/// Expected: Ok(Vec<Profile>) with only the profile whose name contains the literal
/// character
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let underscored = factory::profile::create_profile_named(db, "red_fox").await?;
    factory::profile::create_profile_named(db, "redfox").await?;
    factory::profile::create_profile_named(db, "wolf").await?;

    let repo = ProfileRepository::new(db);

    assert!(repo.search("%", 10).await?.is_empty());

    let results = repo.search("_", 10).await?;
    assert_eq!(
        results.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![underscored.id]
    );

    Ok(())
}
