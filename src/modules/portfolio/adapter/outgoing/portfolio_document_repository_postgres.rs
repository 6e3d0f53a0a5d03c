use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;

use super::sea_orm_entity::portfolio_documents;
use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::modules::portfolio::domain::{PortfolioData, PORTFOLIO_ID};

/// Document backend: the whole portfolio lives in one JSONB column.
///
/// Every write is a single statement, so replace is atomic without an
/// explicit transaction and item ids survive exactly as written.
#[derive(Clone)]
pub struct PortfolioDocumentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioDocumentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PortfolioRepositoryError {
        PortfolioRepositoryError::DatabaseError(e.to_string())
    }

    fn active_model(
        data: &PortfolioData,
    ) -> Result<portfolio_documents::ActiveModel, PortfolioRepositoryError> {
        let json = serde_json::to_value(data)
            .map_err(|e| PortfolioRepositoryError::StorageError(e.to_string()))?;

        Ok(portfolio_documents::ActiveModel {
            id: Set(PORTFOLIO_ID),
            data: Set(json),
            updated_at: Set(Utc::now().into()),
        })
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioDocumentRepositoryPostgres {
    async fn find(&self) -> Result<Option<PortfolioData>, PortfolioRepositoryError> {
        let row = portfolio_documents::Entity::find_by_id(PORTFOLIO_ID)
            .one(self.db.as_ref())
            .await
            .map_err(Self::map_db_err)?;

        match row {
            None => Ok(None),
            Some(model) => serde_json::from_value(model.data)
                .map(Some)
                .map_err(|e| PortfolioRepositoryError::StorageError(e.to_string())),
        }
    }

    async fn seed(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let model = Self::active_model(data)?;

        portfolio_documents::Entity::insert(model)
            .on_conflict(
                OnConflict::column(portfolio_documents::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn replace(&self, data: &PortfolioData) -> Result<(), PortfolioRepositoryError> {
        let model = Self::active_model(data)?;

        portfolio_documents::Entity::insert(model)
            .on_conflict(
                OnConflict::column(portfolio_documents::Column::Id)
                    .update_columns([
                        portfolio_documents::Column::Data,
                        portfolio_documents::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}
