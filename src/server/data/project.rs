//! Project repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::project::{CreateProjectParam, Project, UpdateProjectParam};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new project.
    pub async fn create(&self, param: CreateProjectParam) -> Result<Project, DbErr> {
        let fields = param.fields;
        let entity = entity::project::ActiveModel {
            title: ActiveValue::Set(fields.title),
            text: ActiveValue::Set(fields.text),
            source_code: ActiveValue::Set(fields.source_code),
            image: ActiveValue::Set(fields.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    /// Gets all projects in insertion order.
    pub async fn get_all(&self) -> Result<Vec<Project>, DbErr> {
        let entities = entity::prelude::Project::find()
            .order_by_asc(entity::project::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Project::from_entity).collect())
    }

    /// Replaces every column of an existing project.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - The updated project
    /// - `Ok(None)` - No project with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, param: UpdateProjectParam) -> Result<Option<Project>, DbErr> {
        let Some(project) = entity::prelude::Project::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let fields = param.fields;
        let mut active_model: entity::project::ActiveModel = project.into();
        active_model.title = ActiveValue::Set(fields.title);
        active_model.text = ActiveValue::Set(fields.text);
        active_model.source_code = ActiveValue::Set(fields.source_code);
        active_model.image = ActiveValue::Set(fields.image);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Project::from_entity(entity)))
    }

    /// Deletes a project by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The project existed and was deleted
    /// - `Ok(false)` - No project with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
