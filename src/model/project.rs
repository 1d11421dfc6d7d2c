use serde::Deserialize;

/// `POST /dashboard/create_project`
#[derive(Deserialize, Clone, Debug, Default)]
pub struct CreateProjectForm {
    #[serde(default)]
    pub title: String,
    pub text: Option<String>,
    pub source_code: Option<String>,
    pub image: Option<String>,
}

/// `POST /dashboard/edit_project`
#[derive(Deserialize, Clone, Debug)]
pub struct EditProjectForm {
    pub project_id: i32,
    #[serde(default)]
    pub title: String,
    pub text: Option<String>,
    pub source_code: Option<String>,
    pub image: Option<String>,
}
