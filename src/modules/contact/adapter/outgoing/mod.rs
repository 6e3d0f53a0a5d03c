pub mod logging_contact_sink;
pub mod smtp_contact_sink;

pub use logging_contact_sink::LoggingContactSink;
pub use smtp_contact_sink::SmtpContactSink;
