//! User service for business logic.
//!
//! This module provides the `UserService` for creating, renaming, listing and deleting
//! dashboard accounts. It enforces the unique display name rule and hashes passwords
//! before they reach the repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        user_name_too_long, CreateUserOutcome, CreateUserParam, RenameUserOutcome,
        RenameUserParam, User,
    },
    util::password::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from a plain-text password.
    ///
    /// Leaves the table untouched when either field is blank or the name is taken.
    ///
    /// # Arguments
    /// - `user_name` - Display name, stored as given
    /// - `password` - Plain-text password, stored as an Argon2 hash
    ///
    /// # Returns
    /// - `Ok(CreateUserOutcome::Created(User))` - User stored
    /// - `Ok(CreateUserOutcome::MissingFields)` - Name or password blank
    /// - `Ok(CreateUserOutcome::NameTooLong)` - Name over `USER_NAME_MAX` characters
    /// - `Ok(CreateUserOutcome::NameTaken)` - Another user has the name
    /// - `Err(AppError)` - Database or hashing error
    pub async fn create(&self, user_name: &str, password: &str) -> Result<CreateUserOutcome, AppError> {
        if user_name.trim().is_empty() || password.is_empty() {
            return Ok(CreateUserOutcome::MissingFields);
        }

        if user_name_too_long(user_name) {
            return Ok(CreateUserOutcome::NameTooLong);
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.name_exists(user_name, None).await? {
            return Ok(CreateUserOutcome::NameTaken);
        }

        let user = user_repo
            .create(CreateUserParam {
                user_name: user_name.to_string(),
                password_hash: hash_password(password)?,
            })
            .await?;

        Ok(CreateUserOutcome::Created(user))
    }

    /// Renames a user, keeping display names unique.
    ///
    /// # Returns
    /// - `Ok(RenameUserOutcome::Renamed(User))` - Name changed
    /// - `Ok(RenameUserOutcome::MissingName)` - New name blank
    /// - `Ok(RenameUserOutcome::NameTooLong)` - New name over `USER_NAME_MAX` characters
    /// - `Ok(RenameUserOutcome::NameTaken)` - A different user has the name
    /// - `Ok(RenameUserOutcome::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn rename(&self, param: RenameUserParam) -> Result<RenameUserOutcome, AppError> {
        if param.user_name.trim().is_empty() {
            return Ok(RenameUserOutcome::MissingName);
        }

        if user_name_too_long(&param.user_name) {
            return Ok(RenameUserOutcome::NameTooLong);
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(param.id).await?.is_none() {
            return Ok(RenameUserOutcome::NotFound);
        }

        if user_repo
            .name_exists(&param.user_name, Some(param.id))
            .await?
        {
            return Ok(RenameUserOutcome::NameTaken);
        }

        match user_repo.rename(param).await? {
            Some(user) => Ok(RenameUserOutcome::Renamed(user)),
            None => Ok(RenameUserOutcome::NotFound),
        }
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).delete(id).await?)
    }

    /// Lists every user.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Whether no account exists yet, which keeps the account form open to visitors.
    pub async fn is_first_run(&self) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).count().await? == 0)
    }
}
