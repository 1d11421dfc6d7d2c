use serde::Deserialize;

/// `POST /login`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /create_user`
///
/// Field names follow the HTML form (`name`, `pass`).
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CreateUserForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pass: String,
}

/// `POST /dashboard/edit_user`
#[derive(Deserialize, Clone, Debug)]
pub struct EditUserForm {
    pub user_id: i32,
    pub user_name: String,
}
