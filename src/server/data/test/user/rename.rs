use super::*;

/// Tests renaming an existing user.
///
/// Expected: Ok(Some) with the new name persisted
#[tokio::test]
async fn renames_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_name(db, "before").await?;

    let repo = UserRepository::new(db);
    let renamed = repo
        .rename(RenameUserParam {
            id: user.id,
            user_name: "after".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(renamed.user_name, "after");
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().user_name, "after");

    Ok(())
}

/// Tests that renaming keeps the password hash.
///
/// Expected: stored hash unchanged after rename
#[tokio::test]
async fn keeps_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("kept")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.rename(RenameUserParam {
        id: user.id,
        user_name: "renamed".to_string(),
    })
    .await?;

    let credentials = repo.find_credentials_by_name("renamed").await?.unwrap();
    assert_eq!(credentials.password_hash, "kept");

    Ok(())
}

/// Tests renaming a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .rename(RenameUserParam {
            id: 42,
            user_name: "ghost".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
