//! Contact Use Case
//!
//! Drives one submission of a `ContactForm` through a `SubmissionTransport`.
//! A tripped honeypot never reaches the transport.

use crate::domain::entities::{ContactForm, FailureKind, SubmitOutcome};
use crate::domain::ports::{SubmissionTransport, TransportError};

pub struct ContactUseCase<T: SubmissionTransport> {
    transport: T,
}

impl<T: SubmissionTransport> ContactUseCase<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        if !form.begin() {
            return SubmitOutcome::Busy;
        }

        if form.fields().is_honeypot_tripped() {
            form.suppress();
            return SubmitOutcome::Suppressed;
        }

        let result = self
            .transport
            .submit(form.fields())
            .map(|_| ())
            .map_err(|err| match err {
                TransportError::Rejected { .. } => FailureKind::Rejected,
                TransportError::Network { .. } => FailureKind::Network,
            });

        form.complete(result)
    }
}
