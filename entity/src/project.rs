use sea_orm::entity::prelude::*;

/// Portfolio project shown on the public pages.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Path or URL of the project image.
    pub image: Option<String>,
    pub title: String,
    pub text: Option<String>,
    /// Link to the project's source repository.
    pub source_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
