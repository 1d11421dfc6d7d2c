use super::*;

/// Tests looking up credentials for an existing name.
///
/// Expected: Ok(Some) with the stored hash
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("tessa")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_name("tessa").await?.unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests that lookups are exact matches.
///
/// Expected: Ok(None) for an unknown name
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_name(db, "tessa").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials_by_name("tess").await?.is_none());

    Ok(())
}
