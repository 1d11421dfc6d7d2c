//! Full pages, one per rendered route.

pub mod contact;
pub mod create_user;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod projects;
pub mod upload;

pub use contact::contact_page;
pub use create_user::create_user_page;
pub use dashboard::{dashboard_page, DashboardData};
pub use home::home_page;
pub use login::login_page;
pub use projects::projects_page;
pub use upload::{upload_form_page, upload_success};
