use super::*;

/// Tests replacing all project fields.
///
/// Verifies that an update overwrites every column, including clearing optional
/// columns that are now `None`.
///
/// Expected: Ok(Some) with new values persisted
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let project = factory::project::ProjectFactory::new(db)
        .title("Old")
        .text("Old text")
        .source_code("https://github.com/example/old")
        .image("/static/images/old.png")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(UpdateProjectParam {
            id: project.id,
            fields: ProjectFields {
                title: "New".to_string(),
                text: Some("New text".to_string()),
                source_code: None,
                image: Some("/static/images/new.png".to_string()),
            },
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "New");
    assert_eq!(updated.text.as_deref(), Some("New text"));
    assert!(updated.source_code.is_none());
    assert_eq!(repo.get_all().await?, vec![updated]);

    Ok(())
}

/// Tests updating a project that does not exist.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Project)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .update(UpdateProjectParam {
            id: 99,
            fields: ProjectFields {
                title: "Ghost".to_string(),
                text: None,
                source_code: None,
                image: None,
            },
        })
        .await?;

    assert!(result.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
