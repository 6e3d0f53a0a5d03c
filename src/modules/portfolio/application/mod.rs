pub mod editor;
pub mod portfolio_use_cases;
pub mod ports;
pub mod service;
