use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::portfolio::domain::PortfolioData;

/// Flattened view of a portfolio handed to the text generator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryInput {
    pub name: String,
    pub about_me: String,
    /// Project descriptions.
    pub projects: Vec<String>,
    /// `"{role} at {company}: {responsibilities}"` lines.
    pub experiences: Vec<String>,
    /// `"{degree} from {institution}"` lines.
    pub educations: Vec<String>,
    pub skills: Vec<String>,
}

impl From<&PortfolioData> for SummaryInput {
    fn from(data: &PortfolioData) -> Self {
        Self {
            name: data.name.clone(),
            about_me: data.about_me.clone(),
            projects: data.projects.iter().map(|p| p.description.clone()).collect(),
            experiences: data
                .experiences
                .iter()
                .map(|e| {
                    format!(
                        "{} at {}: {}",
                        e.role,
                        e.company,
                        e.responsibilities.join(", ")
                    )
                })
                .collect(),
            educations: data
                .educations
                .iter()
                .map(|e| format!("{} from {}", e.degree, e.institution))
                .collect(),
            skills: data.skills.clone(),
        }
    }
}

fn section(items: &[String]) -> String {
    items.iter().map(|i| format!("{i}\n")).collect()
}

pub fn build_prompt(input: &SummaryInput) -> String {
    format!(
        "You are a professional portfolio summary writer. You will receive information \
about a person's portfolio, and you will write a concise summary of their skills and \
experiences.\n\
\n\
Name: {name}\n\
About Me: {about}\n\
Projects: {projects}\n\
Experiences: {experiences}\n\
Educations: {educations}\n\
Skills: {skills}\n\
\n\
Write a concise summary of the portfolio. Focus on the key skills and experiences.\n",
        name = input.name,
        about = input.about_me,
        projects = section(&input.projects),
        experiences = section(&input.experiences),
        educations = section(&input.educations),
        skills = section(&input.skills),
    )
}
