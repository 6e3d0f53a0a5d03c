use sea_orm_migration::prelude::*;

/// Whole-document storage: the portfolio lives in one JSONB column.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioDocuments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioDocuments::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PortfolioDocuments::Data).json_binary().not_null())
                    .col(
                        ColumnDef::new(PortfolioDocuments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioDocuments {
    Table,
    Id,
    Data,
    UpdatedAt,
}
