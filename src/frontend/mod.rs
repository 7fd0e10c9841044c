//! Front ends over the shared calculator
//!
//! `console` drives the prompt loop, `form` handles one-shot submissions.
//! Neither does any arithmetic of its own.

pub mod console;
pub mod form;

pub use console::{ConsoleSession, RoundOutcome};
pub use form::{FormResponse, FormSubmission};

pub const USAGE_HINT: &str = "Enter measurements as fractions (e.g., '1/2' or '1 1/2')";
pub const RETRY_MESSAGE: &str = "Please try again with valid measurements.";
