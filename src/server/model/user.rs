//! User domain models and parameters.

/// Longest accepted display name, counted in characters.
pub const USER_NAME_MAX: usize = 80;

/// Whether `user_name` exceeds `USER_NAME_MAX` characters.
pub fn user_name_too_long(user_name: &str) -> bool {
    user_name.chars().count() > USER_NAME_MAX
}

/// Dashboard account without its credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
        }
    }
}

/// User together with the stored password hash, only used while signing in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            password_hash: entity.password_hash.clone(),
            user: User::from_entity(entity),
        }
    }
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_name: String,
    pub password_hash: String,
}

/// Parameters for renaming a user.
#[derive(Debug, Clone)]
pub struct RenameUserParam {
    pub id: i32,
    pub user_name: String,
}

/// Result of `UserService::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(User),
    /// Name or password was blank.
    MissingFields,
    /// Name longer than `USER_NAME_MAX` characters.
    NameTooLong,
    NameTaken,
}

/// Result of `UserService::rename`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameUserOutcome {
    Renamed(User),
    /// The new name is blank.
    MissingName,
    /// The new name is longer than `USER_NAME_MAX` characters.
    NameTooLong,
    /// Another user already has the requested name.
    NameTaken,
    NotFound,
}
