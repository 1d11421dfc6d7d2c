//! Contact message repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::message::{CreateMessageParam, Message};

/// Repository providing database operations for contact messages.
///
/// Messages are never updated once stored.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated message stamped with the current UTC time.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            subject: ActiveValue::Set(param.subject),
            message: ActiveValue::Set(param.message),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets all messages, newest first.
    pub async fn get_all(&self) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .order_by_desc(entity::message::Column::Timestamp)
            .order_by_desc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Deletes a message by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The message existed and was deleted
    /// - `Ok(false)` - No message with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
