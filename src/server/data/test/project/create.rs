use super::*;

/// Tests creating a project with only a title.
///
/// Expected: Ok with optional columns stored as NULL
#[tokio::test]
async fn creates_project_with_title_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(CreateProjectParam {
            fields: ProjectFields {
                title: "Timerboard".to_string(),
                text: None,
                source_code: None,
                image: None,
            },
        })
        .await?;

    let stored = repo.get_all().await?;
    assert_eq!(stored, vec![project.clone()]);

    let stored = &stored[0];
    assert_eq!(stored.title, "Timerboard");
    assert!(stored.text.is_none());
    assert!(stored.source_code.is_none());
    assert!(stored.image.is_none());

    Ok(())
}

/// Tests that projects are listed in insertion order.
///
/// Expected: Ok with ids ascending
#[tokio::test]
async fn lists_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_project(db).await?;
    let second = factory::create_project(db).await?;

    let repo = ProjectRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
