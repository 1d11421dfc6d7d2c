use thiserror::Error;

/// Authentication failures raised by `AuthGuard`.
///
/// Both variants are answered with a redirect to the login page; see
/// `AppError::into_response`.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The session carries no user id.
    #[error("No user is signed in")]
    UserNotInSession,

    /// The session references a user that has since been deleted.
    #[error("User {0} from session no longer exists")]
    UserNotInDatabase(i32),
}
