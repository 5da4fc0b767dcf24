//! Submit state machine for the contact form

use super::traits::{Ack, Submission, SubmissionError, SubmissionSink};
use crate::state::{validate, ContactForm, ValidationErrors};

/// Phases of a submit attempt. Every attempt settles back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
}

/// Result of a submit attempt that did not fail in the sink
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the form keeps its values
    Rejected(ValidationErrors),
    /// The submission was recorded and the form was reset
    Accepted(Ack),
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    fn transition(&mut self, next: SubmissionPhase) {
        tracing::trace!(from = ?self.phase, to = ?next, "submission phase");
        self.phase = next;
    }

    /// Validate the form and, if valid, record it through `sink` and reset it.
    ///
    /// On rejection the errors are stored on the form and its values are left
    /// untouched. A sink failure leaves the form as it was before the call,
    /// with its errors cleared.
    pub async fn submit(
        &mut self,
        form: &mut ContactForm,
        sink: &dyn SubmissionSink,
    ) -> Result<SubmitOutcome, SubmissionError> {
        self.transition(SubmissionPhase::Validating);
        let values = form.values();
        let errors = validate(&values);
        form.set_errors(errors.clone());

        if !errors.is_valid() {
            self.transition(SubmissionPhase::Rejected);
            let fields: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
            tracing::debug!(fields = ?fields, "contact form rejected");
            self.transition(SubmissionPhase::Idle);
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let submission = Submission::new(values);
        let ack = match sink.record(&submission).await {
            Ok(ack) => ack,
            Err(err) => {
                self.transition(SubmissionPhase::Idle);
                return Err(err);
            }
        };

        self.transition(SubmissionPhase::Accepted);
        form.reset();
        self.transition(SubmissionPhase::Idle);
        Ok(SubmitOutcome::Accepted(ack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKey, FormValues, ValidationError};
    use crate::submission::MockSubmissionSink;
    use pretty_assertions::assert_eq;

    fn form_with(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.fill(&FormValues::new(name, email, message));
        form
    }

    fn accepting_sink(times: usize) -> MockSubmissionSink {
        let mut sink = MockSubmissionSink::new();
        sink.expect_record().times(times).returning(|submission| {
            Ok(Ack {
                submission_id: submission.id,
            })
        });
        sink
    }

    #[tokio::test]
    async fn test_valid_form_is_accepted_and_reset() {
        let mut controller = SubmissionController::new();
        let mut form = form_with("A", "a@b.co", "hi");
        let sink = accepting_sink(1);

        let outcome = controller.submit(&mut form, &sink).await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert_eq!(form.values(), FormValues::default());
        assert!(form.errors().is_valid());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_sink_receives_the_form_values() {
        let mut controller = SubmissionController::new();
        let mut form = form_with("Ana", "ana@cholchol.cl", "Hola");
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .withf(|submission| {
                submission.values == FormValues::new("Ana", "ana@cholchol.cl", "Hola")
            })
            .times(1)
            .returning(|submission| {
                Ok(Ack {
                    submission_id: submission.id,
                })
            });

        controller.submit(&mut form, &sink).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected_without_recording() {
        let mut controller = SubmissionController::new();
        let mut form = form_with("", "x@y.com", "hi");
        let sink = accepting_sink(0);

        let outcome = controller.submit(&mut form, &sink).await.unwrap();

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![(FieldKey::Name, &ValidationError::Required(FieldKey::Name))]
        );
        assert_eq!(form.values(), FormValues::new("", "x@y.com", "hi"));
        assert_eq!(form.errors(), &errors);
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[tokio::test]
    async fn test_errors_are_recomputed_on_each_attempt() {
        let mut controller = SubmissionController::new();
        let mut form = form_with("", "", "");
        let sink = accepting_sink(0);

        controller.submit(&mut form, &sink).await.unwrap();
        assert_eq!(form.errors().len(), 3);

        form.fill(&FormValues::new("Ana", "nope", "Hola"));
        controller.submit(&mut form, &sink).await.unwrap();
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![FieldKey::Email]);
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_values() {
        let mut controller = SubmissionController::new();
        let mut form = form_with("Ana", "ana@cholchol.cl", "Hola");
        let mut sink = MockSubmissionSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(SubmissionError::Rejected("offline".to_string())));

        let result = controller.submit(&mut form, &sink).await;

        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
        assert_eq!(form.values(), FormValues::new("Ana", "ana@cholchol.cl", "Hola"));
        assert!(form.errors().is_valid());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }
}
