//! Sink that records submissions in the application log

use super::traits::{Ack, Submission, SubmissionError, SubmissionSink};
use async_trait::async_trait;

/// Writes each submission as a structured JSON log record.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }

    fn encode(submission: &Submission) -> Result<String, SubmissionError> {
        Ok(serde_json::to_string(submission)?)
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn record(&self, submission: &Submission) -> Result<Ack, SubmissionError> {
        let record = Self::encode(submission)?;
        tracing::info!(
            submission_id = %submission.id,
            record = %record,
            "contact form submitted"
        );
        Ok(Ack {
            submission_id: submission.id,
        })
    }
}
