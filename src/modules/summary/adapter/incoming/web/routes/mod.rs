mod generate_summary;
pub use generate_summary::*;
