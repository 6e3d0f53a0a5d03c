use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, ReplacePortfolioUseCase,
};
use crate::modules::summary::application::ports::incoming::use_cases::GenerateSummaryUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_portfolio: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    replace_portfolio: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
    login_admin: Arc<dyn ILoginAdminUseCase + Send + Sync>,
    generate_summary: Arc<dyn GenerateSummaryUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    session_cookie_secure: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_portfolio: Arc::new(StubGetPortfolioUseCase),
            replace_portfolio: Arc::new(StubReplacePortfolioUseCase),
            login_admin: Arc::new(StubLoginAdminUseCase),
            generate_summary: Arc::new(StubGenerateSummaryUseCase),
            submit_contact: Arc::new(StubSubmitContactUseCase),
            session_cookie_secure: false,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Arc::new(uc);
        self
    }

    pub fn with_replace_portfolio(
        mut self,
        uc: impl ReplacePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.replace_portfolio = Arc::new(uc);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_generate_summary(
        mut self,
        uc: impl GenerateSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.generate_summary = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.session_cookie_secure = secure;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            portfolio: PortfolioUseCases {
                get: self.get_portfolio,
                replace: self.replace_portfolio,
            },
            login_admin_use_case: self.login_admin,
            generate_summary_use_case: self.generate_summary,
            submit_contact_use_case: self.submit_contact,
            session_cookie_secure: self.session_cookie_secure,
        })
    }
}
