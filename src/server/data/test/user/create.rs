use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the name and hash and returns the new id.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            user_name: "tessa".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.user_name, "tessa");

    let stored = repo.find_credentials_by_name("tessa").await?.unwrap();
    assert_eq!(stored.user.id, user.id);
    assert_eq!(stored.password_hash, "hash");

    Ok(())
}

/// Tests that the unique index rejects a duplicate name.
///
/// Expected: Err and still exactly one user in the table
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_name(db, "tessa").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            user_name: "tessa".to_string(),
            password_hash: "other".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
