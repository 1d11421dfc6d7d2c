use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::message::{CreateMessageParam, Message},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a validated contact form submission.
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, AppError> {
        Ok(MessageRepository::new(self.db).create(param).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(true)` - Message deleted
    /// - `Ok(false)` - No message with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(MessageRepository::new(self.db).delete(id).await?)
    }
}
