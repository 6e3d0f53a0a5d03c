mod generate_summary_service;
pub use generate_summary_service::GenerateSummaryService;
