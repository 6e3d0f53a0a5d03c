pub mod contact_sink;
pub use contact_sink::{ContactSink, ContactSinkError};
