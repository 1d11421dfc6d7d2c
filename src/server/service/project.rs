use sea_orm::DatabaseConnection;

use crate::server::{
    data::project::ProjectRepository,
    error::AppError,
    model::project::{CreateProjectParam, Project, UpdateProjectParam},
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, AppError> {
        Ok(ProjectRepository::new(self.db).create(param).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(Some(Project))` - Project updated
    /// - `Ok(None)` - No project with that id
    pub async fn update(&self, param: UpdateProjectParam) -> Result<Option<Project>, AppError> {
        Ok(ProjectRepository::new(self.db).update(param).await?)
    }

    /// # Returns
    /// - `Ok(true)` - Project deleted
    /// - `Ok(false)` - No project with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProjectRepository::new(self.db).delete(id).await?)
    }
}
