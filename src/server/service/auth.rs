//! Username/password authentication.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::User,
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username/password pair.
    ///
    /// Unknown names and wrong passwords are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Credentials are valid
    /// - `Ok(None)` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, user_name: &str, password: &str) -> Result<Option<User>, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_name(user_name)
            .await?
        else {
            return Ok(None);
        };

        if !verify_password(password, &credentials.password_hash) {
            return Ok(None);
        }

        Ok(Some(credentials.user))
    }
}
