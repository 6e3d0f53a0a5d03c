use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    AccessMode, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IsolationLevel, QueryFilter, QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::{
    portfolio_educations, portfolio_experiences, portfolio_projects, portfolio_skills, portfolios,
};
use super::shape::{active_models, shape, PortfolioActiveModels, PortfolioRows};
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::{PortfolioData, PORTFOLIO_ID};

/// Normalized backend: one parent row plus one table per list.
#[derive(Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }

    fn parent_columns() -> [portfolios::Column; 10] {
        [
            portfolios::Column::Name,
            portfolios::Column::Title,
            portfolios::Column::PhotoUrl,
            portfolios::Column::AboutMe,
            portfolios::Column::Summary,
            portfolios::Column::Email,
            portfolios::Column::Phone,
            portfolios::Column::LinkedinUrl,
            portfolios::Column::GithubUrl,
            portfolios::Column::UpdatedAt,
        ]
    }

    async fn load_rows<C>(conn: &C) -> Result<Option<PortfolioRows>, DbErr>
    where
        C: ConnectionTrait,
    {
        let Some(portfolio) = portfolios::Entity::find_by_id(PORTFOLIO_ID).one(conn).await? else {
            return Ok(None);
        };

        let skills = portfolio_skills::Entity::find()
            .filter(portfolio_skills::Column::PortfolioId.eq(PORTFOLIO_ID))
            .order_by_asc(portfolio_skills::Column::Position)
            .order_by_asc(portfolio_skills::Column::Id)
            .all(conn)
            .await?;

        let projects = portfolio_projects::Entity::find()
            .filter(portfolio_projects::Column::PortfolioId.eq(PORTFOLIO_ID))
            .order_by_asc(portfolio_projects::Column::Position)
            .order_by_asc(portfolio_projects::Column::Id)
            .all(conn)
            .await?;

        let experiences = portfolio_experiences::Entity::find()
            .filter(portfolio_experiences::Column::PortfolioId.eq(PORTFOLIO_ID))
            .order_by_asc(portfolio_experiences::Column::Position)
            .order_by_asc(portfolio_experiences::Column::Id)
            .all(conn)
            .await?;

        let educations = portfolio_educations::Entity::find()
            .filter(portfolio_educations::Column::PortfolioId.eq(PORTFOLIO_ID))
            .order_by_asc(portfolio_educations::Column::Position)
            .order_by_asc(portfolio_educations::Column::Id)
            .all(conn)
            .await?;

        Ok(Some(PortfolioRows {
            portfolio,
            skills,
            projects,
            experiences,
            educations,
        }))
    }

    async fn delete_children(txn: &DatabaseTransaction) -> Result<(), DbErr> {
        portfolio_skills::Entity::delete_many()
            .filter(portfolio_skills::Column::PortfolioId.eq(PORTFOLIO_ID))
            .exec(txn)
            .await?;
        portfolio_projects::Entity::delete_many()
            .filter(portfolio_projects::Column::PortfolioId.eq(PORTFOLIO_ID))
            .exec(txn)
            .await?;
        portfolio_experiences::Entity::delete_many()
            .filter(portfolio_experiences::Column::PortfolioId.eq(PORTFOLIO_ID))
            .exec(txn)
            .await?;
        portfolio_educations::Entity::delete_many()
            .filter(portfolio_educations::Column::PortfolioId.eq(PORTFOLIO_ID))
            .exec(txn)
            .await?;
        Ok(())
    }

    // insert_many with an empty vec is an error, so every list is guarded.
    async fn insert_children(
        txn: &DatabaseTransaction,
        models: PortfolioActiveModels,
    ) -> Result<(), DbErr> {
        if !models.skills.is_empty() {
            portfolio_skills::Entity::insert_many(models.skills)
                .exec_without_returning(txn)
                .await?;
        }
        if !models.projects.is_empty() {
            portfolio_projects::Entity::insert_many(models.projects)
                .exec_without_returning(txn)
                .await?;
        }
        if !models.experiences.is_empty() {
            portfolio_experiences::Entity::insert_many(models.experiences)
                .exec_without_returning(txn)
                .await?;
        }
        if !models.educations.is_empty() {
            portfolio_educations::Entity::insert_many(models.educations)
                .exec_without_returning(txn)
                .await?;
        }
        Ok(())
    }

    async fn replace_in(txn: &DatabaseTransaction, data: &PortfolioData) -> Result<(), DbErr> {
        let models = active_models(PORTFOLIO_ID, data);
        let parent = models.portfolio.clone();

        portfolios::Entity::insert(parent)
            .on_conflict(
                OnConflict::column(portfolios::Column::Id)
                    .update_columns(Self::parent_columns())
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;

        Self::delete_children(txn).await?;
        Self::insert_children(txn, models).await
    }

    /// Returns `false` when a parent row already existed and nothing was written.
    async fn seed_in(txn: &DatabaseTransaction, data: &PortfolioData) -> Result<bool, DbErr> {
        let models = active_models(PORTFOLIO_ID, data);
        let parent = models.portfolio.clone();

        let inserted = portfolios::Entity::insert(parent)
            .on_conflict(
                OnConflict::column(portfolios::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;

        if inserted == 0 {
            return Ok(false);
        }

        Self::insert_children(txn, models).await?;
        Ok(true)
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
            .map_err(Self::map_db_err)?;

        let rows = match Self::load_rows(&txn).await {
            Ok(rows) => rows,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(rows.map(shape))
    }

    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::seed_in(&txn, data).await {
            Ok(written) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                if written {
                    tracing::info!("Seeded portfolio {}", PORTFOLIO_ID);
                }
                Ok(())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(Self::map_db_err(e))
            }
        }
    }

    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::replace_in(&txn, data).await {
            tracing::error!("Portfolio replace rolled back: {}", e);
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
