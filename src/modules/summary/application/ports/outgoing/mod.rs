pub mod summary_generator;
pub use summary_generator::{SummaryGenerator, SummaryGeneratorError};
