//! Conversion between the normalized table rows and `PortfolioData`.

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use super::sea_orm_entity::{
    portfolio_educations, portfolio_experiences, portfolio_projects, portfolio_skills, portfolios,
};
use crate::modules::portfolio::domain::{
    ContactInfo, Education, Experience, PortfolioData, Project,
};

/// Everything one read of the normalized schema returns.
#[derive(Debug, Clone)]
pub struct PortfolioRows {
    pub portfolio: portfolios::Model,
    pub skills: Vec<portfolio_skills::Model>,
    pub projects: Vec<portfolio_projects::Model>,
    pub experiences: Vec<portfolio_experiences::Model>,
    pub educations: Vec<portfolio_educations::Model>,
}

/// Builds the document from rows. Children are ordered by `(position, id)`
/// regardless of input order; row ids become the item ids.
pub fn shape(rows: PortfolioRows) -> PortfolioData {
    let PortfolioRows {
        portfolio,
        mut skills,
        mut projects,
        mut experiences,
        mut educations,
    } = rows;

    skills.sort_by_key(|r| (r.position, r.id));
    projects.sort_by_key(|r| (r.position, r.id));
    experiences.sort_by_key(|r| (r.position, r.id));
    educations.sort_by_key(|r| (r.position, r.id));

    let contact = contact_from(&portfolio);

    PortfolioData {
        name: portfolio.name,
        title: portfolio.title,
        photo_url: portfolio.photo_url,
        about_me: portfolio.about_me,
        summary: portfolio.summary,
        skills: skills.into_iter().map(|s| s.name).collect(),
        projects: projects
            .into_iter()
            .map(|p| Project {
                id: p.id.to_string(),
                title: p.title,
                description: p.description,
                image_url: p.image_url,
                link: p.link,
                tags: string_list(p.tags),
            })
            .collect(),
        experiences: experiences
            .into_iter()
            .map(|e| Experience {
                id: e.id.to_string(),
                role: e.role,
                company: e.company,
                period: e.period,
                responsibilities: string_list(e.responsibilities),
            })
            .collect(),
        educations: educations
            .into_iter()
            .map(|e| Education {
                id: e.id.to_string(),
                institution: e.institution,
                degree: e.degree,
                period: e.period,
            })
            .collect(),
        contact,
    }
}

fn contact_from(p: &portfolios::Model) -> Option<ContactInfo> {
    if p.email.is_none() && p.phone.is_none() && p.linkedin_url.is_none() && p.github_url.is_none()
    {
        return None;
    }
    Some(ContactInfo {
        email: p.email.clone().unwrap_or_default(),
        phone: p.phone.clone().unwrap_or_default(),
        linkedin_url: p.linkedin_url.clone().unwrap_or_default(),
        github_url: p.github_url.clone().unwrap_or_default(),
    })
}

// Anything that is not an array of strings reads as empty.
fn string_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

//
// ──────────────────────────────────────────────────────────
// Document -> active models
// ──────────────────────────────────────────────────────────
//

pub struct PortfolioActiveModels {
    pub portfolio: portfolios::ActiveModel,
    pub skills: Vec<portfolio_skills::ActiveModel>,
    pub projects: Vec<portfolio_projects::ActiveModel>,
    pub experiences: Vec<portfolio_experiences::ActiveModel>,
    pub educations: Vec<portfolio_educations::ActiveModel>,
}

/// Child ids are left unset so the database assigns fresh surrogate keys.
pub fn active_models(id: i32, data: &PortfolioData) -> PortfolioActiveModels {
    let contact = data.contact.as_ref();

    PortfolioActiveModels {
        portfolio: portfolios::ActiveModel {
            id: Set(id),
            name: Set(data.name.clone()),
            title: Set(data.title.clone()),
            photo_url: Set(data.photo_url.clone()),
            about_me: Set(data.about_me.clone()),
            summary: Set(data.summary.clone()),
            email: Set(contact.map(|c| c.email.clone())),
            phone: Set(contact.map(|c| c.phone.clone())),
            linkedin_url: Set(contact.map(|c| c.linkedin_url.clone())),
            github_url: Set(contact.map(|c| c.github_url.clone())),
            updated_at: Set(Utc::now().into()),
        },
        skills: data
            .skills
            .iter()
            .enumerate()
            .map(|(i, name)| portfolio_skills::ActiveModel {
                id: NotSet,
                portfolio_id: Set(id),
                position: Set(i as i32),
                name: Set(name.clone()),
            })
            .collect(),
        projects: data
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| portfolio_projects::ActiveModel {
                id: NotSet,
                portfolio_id: Set(id),
                position: Set(i as i32),
                title: Set(p.title.clone()),
                description: Set(p.description.clone()),
                image_url: Set(p.image_url.clone()),
                link: Set(p.link.clone()),
                tags: Set(serde_json::Value::from(p.tags.clone())),
            })
            .collect(),
        experiences: data
            .experiences
            .iter()
            .enumerate()
            .map(|(i, e)| portfolio_experiences::ActiveModel {
                id: NotSet,
                portfolio_id: Set(id),
                position: Set(i as i32),
                role: Set(e.role.clone()),
                company: Set(e.company.clone()),
                period: Set(e.period.clone()),
                responsibilities: Set(serde_json::Value::from(e.responsibilities.clone())),
            })
            .collect(),
        educations: data
            .educations
            .iter()
            .enumerate()
            .map(|(i, e)| portfolio_educations::ActiveModel {
                id: NotSet,
                portfolio_id: Set(id),
                position: Set(i as i32),
                institution: Set(e.institution.clone()),
                degree: Set(e.degree.clone()),
                period: Set(e.period.clone()),
            })
            .collect(),
    }
}
