use super::*;

/// Tests that deleting a project removes exactly that row.
///
/// Expected: Ok(true) with every other project untouched
#[tokio::test]
async fn deletes_only_target_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_project(db).await?;
    let target = factory::create_project(db).await?;
    let last = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.delete(target.id).await?);

    let ids: Vec<i32> = repo.get_all().await?.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, last.id]);

    Ok(())
}

/// Tests deleting a missing project.
///
/// Expected: Ok(false) and nothing removed
#[tokio::test]
async fn reports_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);

    assert!(!repo.delete(12345).await?);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
