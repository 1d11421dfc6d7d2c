//! Project factory for creating portfolio project test entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating projects with customizable fields.
///
/// Optional columns default to `None`; only the title is always set.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    text: Option<String>,
    source_code: Option<String>,
    image: Option<String>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Project {id}"`
    /// - text, source_code, image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Project {}", id),
            text: None,
            source_code: None,
            image: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = Some(source_code.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            title: ActiveValue::Set(self.title),
            text: ActiveValue::Set(self.text),
            source_code: ActiveValue::Set(self.source_code),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values.
pub async fn create_project(db: &DatabaseConnection) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db).build().await
}
