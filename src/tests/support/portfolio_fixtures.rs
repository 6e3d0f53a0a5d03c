use chrono::{FixedOffset, TimeZone};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use serde_json::Value;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_documents, portfolio_educations, portfolio_experiences, portfolio_projects,
    portfolio_skills, portfolios,
};
use crate::modules::portfolio::domain::{
    ContactInfo, Education, Experience, PortfolioData, Project, PORTFOLIO_ID,
};

// =====================================================
// Row fixtures
// =====================================================

pub fn parent_row() -> portfolios::Model {
    portfolios::Model {
        id: PORTFOLIO_ID,
        name: "Ada Lovelace".to_string(),
        title: "Analyst".to_string(),
        photo_url: "https://example.com/ada.png".to_string(),
        about_me: "First programmer.".to_string(),
        summary: "Writes notes on engines.".to_string(),
        email: Some("ada@example.com".to_string()),
        phone: Some("".to_string()),
        linkedin_url: Some("https://linkedin.com/in/ada".to_string()),
        github_url: Some("https://github.com/ada".to_string()),
        updated_at: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .unwrap(),
    }
}

pub fn skill_row(id: i32, position: i32, name: &str) -> portfolio_skills::Model {
    portfolio_skills::Model {
        id,
        portfolio_id: PORTFOLIO_ID,
        position,
        name: name.to_string(),
    }
}

pub fn project_row(id: i32, position: i32, title: &str, tags: Value) -> portfolio_projects::Model {
    portfolio_projects::Model {
        id,
        portfolio_id: PORTFOLIO_ID,
        position,
        title: title.to_string(),
        description: format!("{title} description"),
        image_url: "https://placehold.co/600x400.png".to_string(),
        link: format!("https://example.com/{id}"),
        tags,
    }
}

pub fn experience_row(
    id: i32,
    position: i32,
    role: &str,
    responsibilities: Value,
) -> portfolio_experiences::Model {
    portfolio_experiences::Model {
        id,
        portfolio_id: PORTFOLIO_ID,
        position,
        role: role.to_string(),
        company: "Analytical Engines Ltd".to_string(),
        period: "1842 - 1843".to_string(),
        responsibilities,
    }
}

pub fn education_row(id: i32, position: i32, institution: &str) -> portfolio_educations::Model {
    portfolio_educations::Model {
        id,
        portfolio_id: PORTFOLIO_ID,
        position,
        institution: institution.to_string(),
        degree: "Mathematics".to_string(),
        period: "1830s".to_string(),
    }
}

// =====================================================
// Document fixtures
// =====================================================

/// A document exercising every list, with ids the normalized backend will
/// replace.
pub fn sample_portfolio() -> PortfolioData {
    PortfolioData {
        name: "Grace Hopper".to_string(),
        title: "Rear Admiral".to_string(),
        photo_url: "https://example.com/grace.png".to_string(),
        about_me: "Compilers and COBOL.".to_string(),
        summary: "Pioneer of machine-independent languages.".to_string(),
        skills: vec!["COBOL".to_string(), "FLOW-MATIC".to_string(), "Teaching".to_string()],
        projects: vec![
            Project {
                id: "client-a".to_string(),
                title: "A-0".to_string(),
                description: "First compiler".to_string(),
                image_url: "https://example.com/a0.png".to_string(),
                link: "https://example.com/a0".to_string(),
                tags: vec!["compiler".to_string(), "1952".to_string()],
            },
            Project {
                id: "client-b".to_string(),
                title: "COBOL".to_string(),
                description: "Business language".to_string(),
                image_url: "https://example.com/cobol.png".to_string(),
                link: "https://example.com/cobol".to_string(),
                tags: vec![],
            },
        ],
        experiences: vec![Experience {
            id: "client-c".to_string(),
            role: "Programmer".to_string(),
            company: "Harvard Mark I".to_string(),
            period: "1944 - 1949".to_string(),
            responsibilities: vec!["Wrote the manual".to_string(), "Debugged".to_string()],
        }],
        educations: vec![Education {
            id: "client-d".to_string(),
            institution: "Yale".to_string(),
            degree: "PhD Mathematics".to_string(),
            period: "1934".to_string(),
        }],
        contact: Some(ContactInfo {
            email: "grace@example.com".to_string(),
            phone: "555-0100".to_string(),
            linkedin_url: String::new(),
            github_url: String::new(),
        }),
    }
}

// =====================================================
// In-memory SQLite
// =====================================================

/// Fresh in-memory SQLite database with the portfolio tables created from
/// the entities.
pub async fn sqlite_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    db.execute(backend.build(&schema.create_table_from_entity(portfolios::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(portfolio_skills::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(portfolio_projects::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(portfolio_experiences::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(portfolio_educations::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(portfolio_documents::Entity)))
        .await
        .unwrap();

    db
}

/// Fresh in-memory SQLite database with the schema built by the migrations,
/// the way a deployment gets it.
pub async fn migrated_sqlite_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}
