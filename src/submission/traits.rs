//! Trait abstraction for recording submissions, enabling mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A captured contact form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub values: FormValues,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            values,
        }
    }
}

/// Acknowledgement that a submission was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub submission_id: Uuid,
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission was not accepted: {0}")]
    Rejected(String),
}

/// Destination for accepted submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Record a submission that passed validation
    async fn record(&self, submission: &Submission) -> Result<Ack, SubmissionError>;
}
