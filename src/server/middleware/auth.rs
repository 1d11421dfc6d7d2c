use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, FlashSession},
    model::user::User,
};

const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to access this page.";

/// Resolves the session's signed-in user for protected handlers.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in user, if any.
    ///
    /// A session pointing at a deleted user is treated as signed out.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    /// Requires a signed-in user.
    ///
    /// On failure a flash message asking the visitor to log in is queued, and the
    /// returned `AuthError` renders as a redirect to `/login`. A session whose user
    /// has been deleted is cleared.
    ///
    /// # Returns
    /// - `Ok(User)` - The signed-in user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is signed in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The session's user no longer exists
    pub async fn require(&self) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);
        let flash = FlashSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            flash.error(LOGIN_REQUIRED_MESSAGE).await?;
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            auth_session.logout().await?;
            flash.error(LOGIN_REQUIRED_MESSAGE).await?;
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }
}
