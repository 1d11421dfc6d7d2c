use super::*;

/// Tests storing a contact message.
///
/// Verifies that every submitted field is persisted and a timestamp is assigned.
///
/// Expected: Ok with exactly one row stored
#[tokio::test]
async fn stores_message_with_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = chrono::Utc::now();

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "I enjoyed your projects page.".to_string(),
        })
        .await?;

    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.subject, "Hello");
    assert!(message.timestamp >= before - chrono::Duration::seconds(1));

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, message.id);

    Ok(())
}
