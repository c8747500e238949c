use super::*;

/// Tests logging out with and without a token.
///
/// Expected: the token is revoked when present; nothing happens otherwise
#[tokio::test]
async fn revokes_presented_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = StubIdentity::default();
    let service = AuthService::new(db, &identity);

    service.logout(None).await;
    service.logout(Some("token-1")).await;

    assert_eq!(*identity.signed_out.lock().unwrap(), vec!["token-1".to_string()]);

    Ok(())
}

/// Tests that sign in failures surface as login failures.
///
/// Expected: Err(AuthError::LoginFailed)
#[tokio::test]
async fn login_failure_passes_through() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let identity = StubIdentity::default();

    let result = AuthService::new(db, &identity)
        .login("vixen@example.com", "wrong")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::LoginFailed(_)))
    ));

    Ok(())
}
