use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::entities::{ContactInfo, Education, Experience, PortfolioData, Project};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("`name` is required")]
    MissingName,

    #[error("`projects` is required")]
    MissingProjects,

    #[error("`projects` must be a list of projects: {0}")]
    InvalidProjects(String),
}

/// Incoming replacement document, as submitted by the admin surface.
///
/// Everything is lenient except the two fields a document cannot exist
/// without. Those stay untyped until `validate`, so a wrong-typed `name` or
/// `projects` is a format error rather than a body parse error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPayload {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default)]
    pub about_me: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[schema(value_type = Option<Vec<Project>>)]
    pub projects: Option<Value>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub contact: Option<ContactInfo>,
}

impl PortfolioPayload {
    pub fn validate(self) -> Result<PortfolioData, PayloadError> {
        let name = match self.name {
            Some(Value::String(name)) if !name.trim().is_empty() => name,
            _ => return Err(PayloadError::MissingName),
        };
        let projects = match self.projects {
            Some(projects @ Value::Array(_)) => serde_json::from_value::<Vec<Project>>(projects)
                .map_err(|e| PayloadError::InvalidProjects(e.to_string()))?,
            Some(other) => {
                return Err(PayloadError::InvalidProjects(format!(
                    "expected an array, found {}",
                    value_kind(&other)
                )))
            }
            None => return Err(PayloadError::MissingProjects),
        };

        Ok(PortfolioData {
            name,
            title: self.title,
            photo_url: self.photo_url,
            about_me: self.about_me,
            summary: self.summary,
            skills: self.skills,
            projects,
            experiences: self.experiences,
            educations: self.educations,
            contact: self.contact,
        })
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<PortfolioData> for PortfolioPayload {
    fn from(data: PortfolioData) -> Self {
        Self {
            name: Some(Value::String(data.name)),
            title: data.title,
            photo_url: data.photo_url,
            about_me: data.about_me,
            summary: data.summary,
            skills: data.skills,
            projects: serde_json::to_value(&data.projects).ok(),
            experiences: data.experiences,
            educations: data.educations,
            contact: data.contact,
        }
    }
}
