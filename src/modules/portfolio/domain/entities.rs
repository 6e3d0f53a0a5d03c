use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed identity of the one portfolio record a deployment serves.
pub const PORTFOLIO_ID: i32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub photo_url: String,
    pub about_me: String,
    pub summary: String,
    /// Display order matters.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
}

impl PortfolioData {
    /// Same document with every list item id blanked.
    ///
    /// Backends that regenerate surrogate ids compare equal under this view.
    pub fn without_item_ids(&self) -> Self {
        let mut copy = self.clone();
        copy.projects.iter_mut().for_each(|p| p.id.clear());
        copy.experiences.iter_mut().for_each(|e| e.id.clear());
        copy.educations.iter_mut().for_each(|e| e.id.clear());
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let data = PortfolioData {
            name: "Ada".to_string(),
            photo_url: "https://example.com/ada.png".to_string(),
            about_me: "About".to_string(),
            projects: vec![Project {
                id: "p1".to_string(),
                image_url: "https://example.com/p1.png".to_string(),
                ..Default::default()
            }],
            contact: Some(ContactInfo {
                linkedin_url: "https://linkedin.com/in/ada".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["photoUrl"], "https://example.com/ada.png");
        assert_eq!(json["aboutMe"], "About");
        assert_eq!(json["projects"][0]["imageUrl"], "https://example.com/p1.png");
        assert_eq!(json["contact"]["linkedinUrl"], "https://linkedin.com/in/ada");
        assert!(json.get("photo_url").is_none());
    }

    #[test]
    fn missing_contact_is_omitted_and_reads_back_as_none() {
        let data = PortfolioData {
            name: "Ada".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("contact").is_none());

        let back: PortfolioData = serde_json::from_value(json).unwrap();
        assert_eq!(back.contact, None);
    }

    #[test]
    fn contact_fields_default_to_empty() {
        let contact: ContactInfo =
            serde_json::from_value(serde_json::json!({ "email": "a@b.c" })).unwrap();

        assert_eq!(contact.email, "a@b.c");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.github_url, "");
    }

    #[test]
    fn without_item_ids_only_touches_ids() {
        let data = PortfolioData {
            skills: vec!["Rust".to_string()],
            educations: vec![Education {
                id: "7".to_string(),
                institution: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let stripped = data.without_item_ids();

        assert_eq!(stripped.educations[0].id, "");
        assert_eq!(stripped.educations[0].institution, "MIT");
        assert_eq!(stripped.skills, data.skills);
    }
}
