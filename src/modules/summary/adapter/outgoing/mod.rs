pub mod disabled_summary_generator;
pub mod gemini_summary_generator;

pub use disabled_summary_generator::DisabledSummaryGenerator;
pub use gemini_summary_generator::GeminiSummaryGenerator;
