use super::*;

/// Tests deleting a message by id.
///
/// Expected: Ok(true) and the other message is kept
#[tokio::test]
async fn deletes_only_target_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_message(db).await?;
    let kept = factory::create_message(db).await?;

    let repo = MessageRepository::new(db);

    assert!(repo.delete(target.id).await?);
    assert!(!repo.delete(target.id).await?);

    let remaining = repo.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
