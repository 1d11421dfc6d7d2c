use super::*;

/// Tests deleting a user by id.
///
/// Expected: Ok(true) and only the other user remains
#[tokio::test]
async fn deletes_only_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::user::create_user(db).await?;
    let kept = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(target.id).await?);

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}

/// Tests deleting a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
