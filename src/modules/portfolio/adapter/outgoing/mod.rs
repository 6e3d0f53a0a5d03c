pub mod portfolio_document_repository_postgres;
pub mod portfolio_repository_json_file;
pub mod portfolio_repository_postgres;
pub mod sea_orm_entity;
pub mod shape;

pub use portfolio_document_repository_postgres::PortfolioDocumentRepositoryPostgres;
pub use portfolio_repository_json_file::PortfolioRepositoryJsonFile;
pub use portfolio_repository_postgres::PortfolioRepositoryPostgres;
