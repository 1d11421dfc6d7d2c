pub use super::message::Entity as Message;
pub use super::project::Entity as Project;
pub use super::user::Entity as User;
