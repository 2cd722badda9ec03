//! SubmissionTransport port
//!
//! Delivers contact-form fields to the hosted form backend.
//! One request per call; no retries.

use crate::domain::entities::ContactFields;

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
}

pub trait SubmissionTransport {
    fn submit(&self, fields: &ContactFields) -> Result<SubmissionReceipt, TransportError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    /// Endpoint answered with a non-success status
    #[error("submission rejected with HTTP {status}")]
    Rejected { status: u16 },

    /// Connection, TLS or timeout failure
    #[error("submission failed: {message}")]
    Network { message: String },
}
