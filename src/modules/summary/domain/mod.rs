pub mod summary_input;
pub use summary_input::{build_prompt, SummaryInput};
