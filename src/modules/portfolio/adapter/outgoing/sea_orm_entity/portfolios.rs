use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,

    pub name: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub photo_url: String,
    #[sea_orm(column_type = "Text")]
    pub about_me: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,

    // Contact block; all NULL when the document has no contact.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio_skills::Entity")]
    Skills,
    #[sea_orm(has_many = "super::portfolio_projects::Entity")]
    Projects,
    #[sea_orm(has_many = "super::portfolio_experiences::Entity")]
    Experiences,
    #[sea_orm(has_many = "super::portfolio_educations::Entity")]
    Educations,
}

impl Related<super::portfolio_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl Related<super::portfolio_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::portfolio_experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl Related<super::portfolio_educations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Educations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
