use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Parent row (singleton, id = 1)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Name).string().not_null())
                    .col(ColumnDef::new(Portfolios::Title).string().not_null())
                    .col(ColumnDef::new(Portfolios::PhotoUrl).text().not_null())
                    .col(ColumnDef::new(Portfolios::AboutMe).text().not_null())
                    .col(ColumnDef::new(Portfolios::Summary).text().not_null())
                    .col(ColumnDef::new(Portfolios::Email).string().null())
                    .col(ColumnDef::new(Portfolios::Phone).string().null())
                    .col(ColumnDef::new(Portfolios::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Portfolios::GithubUrl).string().null())
                    .col(
                        ColumnDef::new(Portfolios::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Child lists
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioSkills::Table)
                    .if_not_exists()
                    .col(child_id(PortfolioSkills::Id))
                    .col(ColumnDef::new(PortfolioSkills::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(PortfolioSkills::Position).integer().not_null())
                    .col(ColumnDef::new(PortfolioSkills::Name).string().not_null())
                    .foreign_key(&mut parent_fk(
                        "fk_portfolio_skills_portfolio_id",
                        PortfolioSkills::Table,
                        PortfolioSkills::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioProjects::Table)
                    .if_not_exists()
                    .col(child_id(PortfolioProjects::Id))
                    .col(ColumnDef::new(PortfolioProjects::PortfolioId).integer().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Position).integer().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Title).string().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Description).text().not_null())
                    .col(ColumnDef::new(PortfolioProjects::ImageUrl).text().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Link).text().not_null())
                    .col(ColumnDef::new(PortfolioProjects::Tags).json_binary().not_null())
                    .foreign_key(&mut parent_fk(
                        "fk_portfolio_projects_portfolio_id",
                        PortfolioProjects::Table,
                        PortfolioProjects::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioExperiences::Table)
                    .if_not_exists()
                    .col(child_id(PortfolioExperiences::Id))
                    .col(
                        ColumnDef::new(PortfolioExperiences::PortfolioId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioExperiences::Position).integer().not_null())
                    .col(ColumnDef::new(PortfolioExperiences::Role).string().not_null())
                    .col(ColumnDef::new(PortfolioExperiences::Company).string().not_null())
                    .col(ColumnDef::new(PortfolioExperiences::Period).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioExperiences::Responsibilities)
                            .json_binary()
                            .not_null(),
                    )
                    .foreign_key(&mut parent_fk(
                        "fk_portfolio_experiences_portfolio_id",
                        PortfolioExperiences::Table,
                        PortfolioExperiences::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PortfolioEducations::Table)
                    .if_not_exists()
                    .col(child_id(PortfolioEducations::Id))
                    .col(
                        ColumnDef::new(PortfolioEducations::PortfolioId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioEducations::Position).integer().not_null())
                    .col(ColumnDef::new(PortfolioEducations::Institution).string().not_null())
                    .col(ColumnDef::new(PortfolioEducations::Degree).string().not_null())
                    .col(ColumnDef::new(PortfolioEducations::Period).string().not_null())
                    .foreign_key(&mut parent_fk(
                        "fk_portfolio_educations_portfolio_id",
                        PortfolioEducations::Table,
                        PortfolioEducations::PortfolioId,
                    ))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes: reads always order children by position
        // =====================================================
        manager
            .create_index(
                Index::create()
                    .table(PortfolioSkills::Table)
                    .name("idx_portfolio_skills_position")
                    .col(PortfolioSkills::PortfolioId)
                    .col(PortfolioSkills::Position)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioProjects::Table)
                    .name("idx_portfolio_projects_position")
                    .col(PortfolioProjects::PortfolioId)
                    .col(PortfolioProjects::Position)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioExperiences::Table)
                    .name("idx_portfolio_experiences_position")
                    .col(PortfolioExperiences::PortfolioId)
                    .col(PortfolioExperiences::Position)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(PortfolioEducations::Table)
                    .name("idx_portfolio_educations_position")
                    .col(PortfolioEducations::PortfolioId)
                    .col(PortfolioEducations::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioEducations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioExperiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PortfolioSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}

fn child_id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn parent_fk<T, C>(name: &str, table: T, col: C) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Portfolios::Table, Portfolios::Id)
        .on_delete(ForeignKeyAction::Cascade)
        .on_update(ForeignKeyAction::Cascade)
        .to_owned()
}

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    Name,
    Title,
    PhotoUrl,
    AboutMe,
    Summary,
    Email,
    Phone,
    LinkedinUrl,
    GithubUrl,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PortfolioSkills {
    Table,
    Id,
    PortfolioId,
    Position,
    Name,
}

#[derive(DeriveIden)]
enum PortfolioProjects {
    Table,
    Id,
    PortfolioId,
    Position,
    Title,
    Description,
    ImageUrl,
    Link,
    Tags,
}

#[derive(DeriveIden)]
enum PortfolioExperiences {
    Table,
    Id,
    PortfolioId,
    Position,
    Role,
    Company,
    Period,
    Responsibilities,
}

#[derive(DeriveIden)]
enum PortfolioEducations {
    Table,
    Id,
    PortfolioId,
    Position,
    Institution,
    Degree,
    Period,
}
