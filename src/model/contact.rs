use serde::Deserialize;

/// `POST /contact`
///
/// Also used to refill the form when validation fails, hence `Default` and `PartialEq`.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Per-field validation messages for the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    /// Problems not tied to a single field, such as a stale CSRF token.
    pub form: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.form.is_none()
            && self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}
