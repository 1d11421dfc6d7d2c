//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, renaming, lookups and deletion with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, RenameUserParam, User, UserCredentials};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The `user_name` column carries a unique index, so inserting a taken name fails
    /// with a constraint violation; callers check `name_exists` first.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(param.user_name),
            password_hash: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by display name.
    ///
    /// Only used by the login flow; everything else works with `User`.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No user with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Checks whether a display name is taken.
    ///
    /// # Arguments
    /// - `user_name` - Name to look for
    /// - `except_id` - User to ignore, so that renaming a user to their current name passes
    ///
    /// # Returns
    /// - `Ok(true)` - Another user already has the name
    /// - `Ok(false)` - The name is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn name_exists(&self, user_name: &str, except_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::UserName.eq(user_name));

        if let Some(id) = except_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts all users.
    ///
    /// Used to decide whether the first-run account form is still open.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Changes a user's display name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The renamed user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn rename(&self, param: RenameUserParam) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();
        active_model.user_name = ActiveValue::Set(param.user_name);

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
