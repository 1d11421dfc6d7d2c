use super::*;

/// Tests that a taken name is reported.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_name(db, "tessa").await?;

    let repo = UserRepository::new(db);

    assert!(repo.name_exists("tessa", None).await?);
    assert!(!repo.name_exists("someone", None).await?);

    Ok(())
}

/// Tests that the excluded user does not count as a clash.
///
/// Verifies that a user keeping their own name is not reported as a duplicate
/// while a different user holding the name still is.
///
/// Expected: Ok(false) for the owner, Ok(true) for anyone else
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user_with_name(db, "tessa").await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.name_exists("tessa", Some(owner.id)).await?);
    assert!(repo.name_exists("tessa", Some(other.id)).await?);

    Ok(())
}
