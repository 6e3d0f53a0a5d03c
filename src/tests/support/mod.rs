pub mod app_state_builder;
pub mod auth_helper;
pub mod in_memory_portfolio_repository;
pub mod portfolio_fixtures;
pub mod stubs;
