//! Message factory for creating contact message test entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating contact messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    subject: String,
    message: String,
    timestamp: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Sender {id}"`
    /// - email: `"sender{id}@example.com"`
    /// - subject: `"Subject {id}"`
    /// - message: a sentence long enough to pass contact form validation
    /// - timestamp: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sender {}", id),
            email: format!("sender{}@example.com", id),
            subject: format!("Subject {}", id),
            message: "Hello, I would like to get in touch.".to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set(self.message),
            timestamp: ActiveValue::Set(self.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values.
pub async fn create_message(db: &DatabaseConnection) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db).build().await
}
