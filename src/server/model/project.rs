//! Project domain model and parameters.

use crate::model::project::{CreateProjectForm, EditProjectForm};

const TITLE_MAX: usize = 80;
const FIELD_MAX: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i32,
    pub image: Option<String>,
    pub title: String,
    pub text: Option<String>,
    pub source_code: Option<String>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            image: entity.image,
            title: entity.title,
            text: entity.text,
            source_code: entity.source_code,
        }
    }
}

/// Column values shared by project creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub text: Option<String>,
    pub source_code: Option<String>,
    pub image: Option<String>,
}

impl ProjectFields {
    /// Validates submitted project fields.
    ///
    /// The title is required; blank optional fields become `None`.
    ///
    /// # Returns
    /// - `Ok(ProjectFields)` - Fields ready to store
    /// - `Err(String)` - User-facing reason the submission was rejected
    fn validate(
        title: &str,
        text: Option<&str>,
        source_code: Option<&str>,
        image: Option<&str>,
    ) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Project title is required!".to_string());
        }
        if title.chars().count() > TITLE_MAX {
            return Err(format!(
                "Project title must be at most {} characters.",
                TITLE_MAX
            ));
        }

        let text = optional(text);
        let source_code = optional(source_code);
        let image = optional(image);

        if [&text, &source_code, &image]
            .iter()
            .any(|v| v.as_ref().is_some_and(|s| s.chars().count() > FIELD_MAX))
        {
            return Err(format!(
                "Project fields must be at most {} characters.",
                FIELD_MAX
            ));
        }

        Ok(Self {
            title: title.to_string(),
            text,
            source_code,
            image,
        })
    }
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parameters for inserting a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectParam {
    pub fields: ProjectFields,
}

impl CreateProjectParam {
    pub fn from_form(form: &CreateProjectForm) -> Result<Self, String> {
        Ok(Self {
            fields: ProjectFields::validate(
                &form.title,
                form.text.as_deref(),
                form.source_code.as_deref(),
                form.image.as_deref(),
            )?,
        })
    }
}

/// Parameters for replacing every column of an existing project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProjectParam {
    pub id: i32,
    pub fields: ProjectFields,
}

impl UpdateProjectParam {
    pub fn from_form(form: &EditProjectForm) -> Result<Self, String> {
        Ok(Self {
            id: form.project_id,
            fields: ProjectFields::validate(
                &form.title,
                form.text.as_deref(),
                form.source_code.as_deref(),
                form.image.as_deref(),
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_fields_become_none() {
        let param = CreateProjectParam::from_form(&CreateProjectForm {
            title: " Timerboard ".to_string(),
            text: Some("".to_string()),
            source_code: Some("  ".to_string()),
            image: None,
        })
        .unwrap();

        assert_eq!(param.fields.title, "Timerboard");
        assert_eq!(param.fields.text, None);
        assert_eq!(param.fields.source_code, None);
        assert_eq!(param.fields.image, None);
    }

    #[test]
    fn requires_title() {
        let result = CreateProjectParam::from_form(&CreateProjectForm {
            title: "   ".to_string(),
            ..Default::default()
        });

        assert_eq!(result, Err("Project title is required!".to_string()));
    }

    #[test]
    fn rejects_long_title() {
        let result = UpdateProjectParam::from_form(&EditProjectForm {
            project_id: 1,
            title: "t".repeat(81),
            text: None,
            source_code: None,
            image: None,
        });

        assert!(result.is_err());
    }
}
