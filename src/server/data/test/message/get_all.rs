use super::*;

/// Tests that messages are listed newest first.
///
/// Expected: Ok with the later message first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = chrono::Utc::now();
    let older = factory::message::MessageFactory::new(db)
        .timestamp(now - chrono::Duration::hours(1))
        .build()
        .await?;
    let newer = factory::message::MessageFactory::new(db)
        .timestamp(now)
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.iter().map(|m| m.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
