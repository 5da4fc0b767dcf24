//! Submission handling: the sink seam and the submit state machine

mod controller;
mod log_sink;
mod traits;

pub use controller::{SubmissionController, SubmitOutcome};
pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::{Ack, MockSubmissionSink, SubmissionError};
