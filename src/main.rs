pub mod modules;
pub use modules::{auth, contact, portfolio, summary};
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Verifier;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::login_admin::{ILoginAdminUseCase, LoginAdminUseCase};
use crate::config::{AppConfig, StorageBackend};
use crate::contact::adapter::outgoing::{LoggingContactSink, SmtpContactSink};
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::ports::outgoing::ContactSink;
use crate::contact::application::service::SubmitContactService;
use crate::portfolio::adapter::outgoing::{
    PortfolioDocumentRepositoryPostgres, PortfolioRepositoryJsonFile, PortfolioRepositoryPostgres,
};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::PortfolioRepository;
use crate::portfolio::application::service::{GetPortfolioService, ReplacePortfolioService};
use crate::shared::api::custom_json_config;
use crate::summary::adapter::outgoing::{DisabledSummaryGenerator, GeminiSummaryGenerator};
use crate::summary::application::ports::incoming::use_cases::GenerateSummaryUseCase;
use crate::summary::application::ports::outgoing::SummaryGenerator;
use crate::summary::application::service::GenerateSummaryService;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    pub generate_summary_use_case: Arc<dyn GenerateSummaryUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub session_cookie_secure: bool,
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(url: &str) -> anyhow::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    Argon2Verifier::check_hash(&config.admin.password_hash)
        .context("ADMIN_PASSWORD_HASH is not a valid Argon2 PHC string")?;

    // Storage
    let db = match config.storage.database_url() {
        Some(url) => {
            let db = connect_database(url).await?;
            if config.run_migrations {
                Migrator::up(db.as_ref(), None)
                    .await
                    .context("Migration failed")?;
                info!("Migrations applied");
            }
            Some(db)
        }
        None => None,
    };

    let repository: Arc<dyn PortfolioRepository> = match (&config.storage, &db) {
        (StorageBackend::Normalized { .. }, Some(db)) => {
            Arc::new(PortfolioRepositoryPostgres::new(Arc::clone(db)))
        }
        (StorageBackend::Document { .. }, Some(db)) => {
            Arc::new(PortfolioDocumentRepositoryPostgres::new(Arc::clone(db)))
        }
        (StorageBackend::JsonFile { path }, _) => {
            Arc::new(PortfolioRepositoryJsonFile::new(path.clone()))
        }
        (_, None) => anyhow::bail!("Database backend selected without a connection"),
    };
    info!(storage = config.storage.name(), "Portfolio storage ready");

    let portfolio = PortfolioUseCases {
        get: Arc::new(GetPortfolioService::new(Arc::clone(&repository))),
        replace: Arc::new(ReplacePortfolioService::new(repository)),
    };

    // Admin session
    let jwt_service = JwtTokenService::new(config.admin.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let login_admin_use_case = LoginAdminUseCase::new(
        config.admin.password_hash.clone(),
        Arc::new(Argon2Verifier::new()),
        token_provider_arc.clone(),
    );

    // Summary generator
    let generator: Arc<dyn SummaryGenerator> = match &config.gemini {
        Some(gemini) => Arc::new(
            GeminiSummaryGenerator::new(&gemini.api_url, &gemini.model, &gemini.api_key)
                .context("Failed to build Gemini client")?,
        ),
        None => {
            warn!("GEMINI_API_KEY not set; summary generation disabled");
            Arc::new(DisabledSummaryGenerator)
        }
    };

    // Contact sink
    let sink: Arc<dyn ContactSink> = match &config.smtp {
        Some(smtp) => Arc::new(
            SmtpContactSink::new(
                &smtp.server,
                &smtp.username,
                &smtp.password,
                &smtp.from_email,
                &smtp.inbox,
            )
            .context("Failed to build SMTP transport")?,
        ),
        None => {
            info!("SMTP not configured; contact messages go to the log");
            Arc::new(LoggingContactSink)
        }
    };

    let state = AppState {
        portfolio,
        login_admin_use_case: Arc::new(login_admin_use_case),
        generate_summary_use_case: Arc::new(GenerateSummaryService::new(generator)),
        submit_contact_use_case: Arc::new(SubmitContactService::new(sink)),
        session_cookie_secure: config.admin.cookie_secure,
    };

    let server_url = config.server.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(custom_json_config());

        if let Some(db) = &db {
            app = app.app_data(web::Data::new(Arc::clone(db)));
        }

        app.configure(init_routes).service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
        )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::replace_portfolio_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_admin_handler);
    // Summary
    cfg.service(crate::summary::adapter::incoming::web::routes::generate_summary_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
