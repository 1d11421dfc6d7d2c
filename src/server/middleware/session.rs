//! Typed access to the values kept in the login session.
//!
//! Handlers never touch session keys directly. Each wrapper borrows the request's
//! `Session` and owns one group of keys:
//!
//! - `AuthSession` - id of the signed-in user
//! - `FlashSession` - notifications queued for the next rendered page
//! - `CsrfSession` - the contact form token

use tower_sessions::Session;

use crate::{
    model::flash::Flash,
    server::{error::AppError, util::token::random_token},
};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_FLASH_MESSAGES: &str = "flash:messages";
const SESSION_CSRF_TOKEN: &str = "csrf:token";

/// Sign-in state of a session.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Signs the session in as `user_id`.
    ///
    /// The session id is rotated before the user id is stored, so an id issued to an
    /// anonymous visitor never becomes a signed-in one.
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores `user_id` without rotating the session id.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(user_id))` - Signed in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Session store failure
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Drops everything stored in the session and rotates its id.
    ///
    /// Flash messages queued afterwards still reach the next request.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.clear().await;
        self.session.cycle_id().await?;
        Ok(())
    }
}

/// Flash message session management.
///
/// Messages are queued by one request and drained by the next page render.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Queues a flash message behind any already pending ones.
    pub async fn push(&self, flash: Flash) -> Result<(), AppError> {
        let mut pending: Vec<Flash> = self
            .session
            .get(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        pending.push(flash);

        self.session.insert(SESSION_FLASH_MESSAGES, pending).await?;
        Ok(())
    }

    pub async fn success(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(Flash::success(message)).await
    }

    pub async fn error(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(Flash::error(message)).await
    }

    /// Removes and returns every pending flash message in queue order.
    ///
    /// # Returns
    /// - `Ok(Vec<Flash>)` - Pending messages (empty when none were queued)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_all(&self) -> Result<Vec<Flash>, AppError> {
        let pending = self
            .session
            .remove::<Vec<Flash>>(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        Ok(pending)
    }
}

/// CSRF protection session management.
///
/// One token is issued per session and stays valid until the session ends, so
/// several open tabs can submit the form.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session's token, generating and storing one on first use.
    pub async fn token(&self) -> Result<String, AppError> {
        if let Some(token) = self.session.get::<String>(SESSION_CSRF_TOKEN).await? {
            return Ok(token);
        }

        let token = random_token();
        self.session.insert(SESSION_CSRF_TOKEN, token.clone()).await?;
        Ok(token)
    }

    /// Checks a submitted token against the session's token.
    ///
    /// # Returns
    /// - `Ok(true)` - A token was issued and matches
    /// - `Ok(false)` - No token issued yet, or mismatch
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn verify(&self, submitted: &str) -> Result<bool, AppError> {
        let stored = self.session.get::<String>(SESSION_CSRF_TOKEN).await?;

        Ok(stored.is_some_and(|token| !submitted.is_empty() && token == submitted))
    }
}
