//! Client-side edit surface for the portfolio document.
//!
//! The editor keeps a `baseline` (last loaded or saved document) and a
//! `draft` the admin mutates. Nothing reaches the store until `save`, which
//! sends the whole draft through the replace use case.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::modules::portfolio::domain::{
    ContactInfo, Education, Experience, PortfolioData, Project,
};
use crate::modules::summary::domain::SummaryInput;

pub const NEW_SKILL: &str = "New Skill";
pub const PROJECT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

//
// ──────────────────────────────────────────────────────────
// Addressing
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioList {
    Skills,
    Projects,
    Experiences,
    Educations,
}

impl PortfolioList {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioList::Skills => "skills",
            PortfolioList::Projects => "projects",
            PortfolioList::Experiences => "experiences",
            PortfolioList::Educations => "educations",
        }
    }
}

impl fmt::Display for PortfolioList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioList {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skills" => Ok(PortfolioList::Skills),
            "projects" => Ok(PortfolioList::Projects),
            "experiences" => Ok(PortfolioList::Experiences),
            "educations" => Ok(PortfolioList::Educations),
            other => Err(EditError::UnknownList(other.to_string())),
        }
    }
}

/// Top-level scalar fields, including the four contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Title,
    PhotoUrl,
    AboutMe,
    Summary,
    Email,
    Phone,
    LinkedinUrl,
    GithubUrl,
}

impl FromStr for ProfileField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileField::Name),
            "title" => Ok(ProfileField::Title),
            "photoUrl" => Ok(ProfileField::PhotoUrl),
            "aboutMe" => Ok(ProfileField::AboutMe),
            "summary" => Ok(ProfileField::Summary),
            "email" => Ok(ProfileField::Email),
            "phone" => Ok(ProfileField::Phone),
            "linkedinUrl" => Ok(ProfileField::LinkedinUrl),
            "githubUrl" => Ok(ProfileField::GithubUrl),
            other => Err(EditError::UnknownField(other.to_string())),
        }
    }
}

/// Fields of list elements. `Value` addresses a skill, which is a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Value,
    Title,
    Description,
    ImageUrl,
    Link,
    Tags,
    Role,
    Company,
    Period,
    Institution,
    Degree,
}

impl ItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemField::Value => "value",
            ItemField::Title => "title",
            ItemField::Description => "description",
            ItemField::ImageUrl => "imageUrl",
            ItemField::Link => "link",
            ItemField::Tags => "tags",
            ItemField::Role => "role",
            ItemField::Company => "company",
            ItemField::Period => "period",
            ItemField::Institution => "institution",
            ItemField::Degree => "degree",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "value" => Ok(ItemField::Value),
            "title" => Ok(ItemField::Title),
            "description" => Ok(ItemField::Description),
            "imageUrl" => Ok(ItemField::ImageUrl),
            "link" => Ok(ItemField::Link),
            "tags" => Ok(ItemField::Tags),
            "role" => Ok(ItemField::Role),
            "company" => Ok(ItemField::Company),
            "period" => Ok(ItemField::Period),
            "institution" => Ok(ItemField::Institution),
            "degree" => Ok(ItemField::Degree),
            other => Err(EditError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("field `{field}` does not exist on `{list}` items")]
    FieldNotOnList { list: PortfolioList, field: ItemField },

    #[error("unknown list `{0}`")]
    UnknownList(String),

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// Splits a comma separated tag string, trimming each entry.
pub fn parse_tags(value: &str) -> Vec<String> {
    value.split(',').map(|t| t.trim().to_string()).collect()
}

//
// ──────────────────────────────────────────────────────────
// Editor
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct PortfolioEditor {
    baseline: PortfolioData,
    draft: PortfolioData,
}

impl PortfolioEditor {
    pub fn new(data: PortfolioData) -> Self {
        Self {
            baseline: data.clone(),
            draft: data,
        }
    }

    pub async fn load(use_case: &dyn GetPortfolioUseCase) -> Result<Self, GetPortfolioError> {
        let data = use_case.execute().await?;
        Ok(Self::new(data))
    }

    pub fn draft(&self) -> &PortfolioData {
        &self.draft
    }

    pub fn baseline(&self) -> &PortfolioData {
        &self.baseline
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.baseline
    }

    pub fn discard(&mut self) {
        self.draft = self.baseline.clone();
    }

    pub fn set_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        let draft = &mut self.draft;
        match field {
            ProfileField::Name => draft.name = value,
            ProfileField::Title => draft.title = value,
            ProfileField::PhotoUrl => draft.photo_url = value,
            ProfileField::AboutMe => draft.about_me = value,
            ProfileField::Summary => draft.summary = value,
            ProfileField::Email => contact_mut(draft).email = value,
            ProfileField::Phone => contact_mut(draft).phone = value,
            ProfileField::LinkedinUrl => contact_mut(draft).linkedin_url = value,
            ProfileField::GithubUrl => contact_mut(draft).github_url = value,
        }
    }

    /// Appends a default element and returns its index.
    pub fn add_item(&mut self, list: PortfolioList) -> usize {
        let draft = &mut self.draft;
        match list {
            PortfolioList::Skills => {
                draft.skills.push(NEW_SKILL.to_string());
                draft.skills.len() - 1
            }
            PortfolioList::Projects => {
                draft.projects.push(Project {
                    id: new_item_id(),
                    image_url: PROJECT_PLACEHOLDER_IMAGE.to_string(),
                    ..Default::default()
                });
                draft.projects.len() - 1
            }
            PortfolioList::Experiences => {
                draft.experiences.push(Experience {
                    id: new_item_id(),
                    responsibilities: vec![String::new()],
                    ..Default::default()
                });
                draft.experiences.len() - 1
            }
            PortfolioList::Educations => {
                draft.educations.push(Education {
                    id: new_item_id(),
                    ..Default::default()
                });
                draft.educations.len() - 1
            }
        }
    }

    /// Removes the element at `index`. Returns `false` when out of range.
    pub fn remove_item(&mut self, list: PortfolioList, index: usize) -> bool {
        let draft = &mut self.draft;
        match list {
            PortfolioList::Skills => remove_at(&mut draft.skills, index),
            PortfolioList::Projects => remove_at(&mut draft.projects, index),
            PortfolioList::Experiences => remove_at(&mut draft.experiences, index),
            PortfolioList::Educations => remove_at(&mut draft.educations, index),
        }
    }

    /// Sets one field of one element. An out-of-range index changes nothing
    /// and returns `Ok(false)`.
    pub fn update_field(
        &mut self,
        list: PortfolioList,
        index: usize,
        field: ItemField,
        value: &str,
    ) -> Result<bool, EditError> {
        let not_on_list = || EditError::FieldNotOnList { list, field };
        let draft = &mut self.draft;

        match list {
            PortfolioList::Skills => {
                if field != ItemField::Value {
                    return Err(not_on_list());
                }
                Ok(with_item(&mut draft.skills, index, |skill| {
                    *skill = value.to_string()
                }))
            }
            PortfolioList::Projects => {
                let slot: fn(&mut Project) -> &mut String = match field {
                    ItemField::Title => |p| &mut p.title,
                    ItemField::Description => |p| &mut p.description,
                    ItemField::ImageUrl => |p| &mut p.image_url,
                    ItemField::Link => |p| &mut p.link,
                    ItemField::Tags => {
                        return Ok(with_item(&mut draft.projects, index, |p| {
                            p.tags = parse_tags(value)
                        }))
                    }
                    _ => return Err(not_on_list()),
                };
                Ok(with_item(&mut draft.projects, index, |p| {
                    *slot(p) = value.to_string()
                }))
            }
            PortfolioList::Experiences => {
                let slot: fn(&mut Experience) -> &mut String = match field {
                    ItemField::Role => |e| &mut e.role,
                    ItemField::Company => |e| &mut e.company,
                    ItemField::Period => |e| &mut e.period,
                    _ => return Err(not_on_list()),
                };
                Ok(with_item(&mut draft.experiences, index, |e| {
                    *slot(e) = value.to_string()
                }))
            }
            PortfolioList::Educations => {
                let slot: fn(&mut Education) -> &mut String = match field {
                    ItemField::Institution => |e| &mut e.institution,
                    ItemField::Degree => |e| &mut e.degree,
                    ItemField::Period => |e| &mut e.period,
                    _ => return Err(not_on_list()),
                };
                Ok(with_item(&mut draft.educations, index, |e| {
                    *slot(e) = value.to_string()
                }))
            }
        }
    }

    /// Appends an empty responsibility to one experience and returns its index.
    pub fn add_responsibility(&mut self, experience: usize) -> Option<usize> {
        let exp = self.draft.experiences.get_mut(experience)?;
        exp.responsibilities.push(String::new());
        Some(exp.responsibilities.len() - 1)
    }

    pub fn update_responsibility(&mut self, experience: usize, index: usize, value: &str) -> bool {
        match self.draft.experiences.get_mut(experience) {
            Some(exp) => with_item(&mut exp.responsibilities, index, |r| {
                *r = value.to_string()
            }),
            None => false,
        }
    }

    pub fn remove_responsibility(&mut self, experience: usize, index: usize) -> bool {
        match self.draft.experiences.get_mut(experience) {
            Some(exp) => remove_at(&mut exp.responsibilities, index),
            None => false,
        }
    }

    pub fn summary_input(&self) -> SummaryInput {
        SummaryInput::from(&self.draft)
    }

    pub fn apply_summary(&mut self, summary: impl Into<String>) {
        self.draft.summary = summary.into();
    }

    /// Sends the draft as a whole-document replace. The baseline only moves
    /// on success; a failed save leaves the draft untouched.
    pub async fn save(
        &mut self,
        use_case: &dyn ReplacePortfolioUseCase,
    ) -> Result<(), ReplacePortfolioError> {
        use_case.execute(self.draft.clone().into()).await?;
        self.baseline = self.draft.clone();
        Ok(())
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

fn contact_mut(draft: &mut PortfolioData) -> &mut ContactInfo {
    draft.contact.get_or_insert_with(ContactInfo::default)
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

fn with_item<T>(items: &mut [T], index: usize, edit: impl FnOnce(&mut T)) -> bool {
    match items.get_mut(index) {
        Some(item) => {
            edit(item);
            true
        }
        None => false,
    }
}
