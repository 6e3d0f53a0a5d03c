mod generate_summary;
pub use generate_summary::{GenerateSummaryError, GenerateSummaryUseCase};
