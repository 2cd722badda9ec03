//! Contact form entity
//!
//! Holds the form fields plus the `loading` / `status` pair shown to the
//! visitor. Transitions:
//!
//! ```text
//! idle --begin--> loading --complete(ok)--> success (fields cleared)
//!                    |------complete(err)-> failure (fields kept)
//!                    `------suppress------> idle    (honeypot tripped)
//! ```

use crate::domain::value_objects::Locale;

/// Form field names as posted to the submission endpoint.
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_HONEYPOT: &str = "_gotcha";

/// Values entered into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden anti-automation field; humans never fill it.
    pub gotcha: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            gotcha: String::new(),
        }
    }

    pub fn with_gotcha(mut self, gotcha: impl Into<String>) -> Self {
        self.gotcha = gotcha.into();
        self
    }

    pub fn is_honeypot_tripped(&self) -> bool {
        !self.gotcha.is_empty()
    }

    /// Form-encoded pairs in submission order.
    pub fn form_pairs(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_NAME, self.name.as_str()),
            (FIELD_EMAIL, self.email.as_str()),
            (FIELD_MESSAGE, self.message.as_str()),
            (FIELD_HONEYPOT, self.gotcha.as_str()),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Why a submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Endpoint answered with a non-success status
    Rejected,
    /// Request never got an answer
    Network,
}

/// Status line under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Failure(FailureKind),
}

impl FormStatus {
    pub fn message(&self, locale: Locale) -> Option<&'static str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Success => Some(locale.messages().sent),
            FormStatus::Failure(FailureKind::Rejected) => Some(locale.messages().rejected),
            FormStatus::Failure(FailureKind::Network) => Some(locale.messages().network_error),
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(FailureKind),
    /// Honeypot tripped: nothing was sent and nothing is shown
    Suppressed,
    /// A submission is already in flight
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    loading: bool,
    status: FormStatus,
}

impl ContactForm {
    pub fn new(fields: ContactFields) -> Self {
        Self {
            fields,
            loading: false,
            status: FormStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn status_message(&self, locale: Locale) -> Option<&'static str> {
        self.status.message(locale)
    }

    pub fn button_label(&self, locale: Locale) -> &'static str {
        if self.loading {
            locale.messages().sending
        } else {
            locale.messages().send
        }
    }

    /// Enter the loading state. Returns `false` while a submission is in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.status = FormStatus::Idle;
        true
    }

    /// Abort silently (honeypot).
    pub fn suppress(&mut self) {
        self.status = FormStatus::Idle;
        self.loading = false;
    }

    /// Finish an in-flight submission. Fields are cleared only on success.
    pub fn complete(&mut self, result: Result<(), FailureKind>) -> SubmitOutcome {
        self.loading = false;
        match result {
            Ok(()) => {
                self.status = FormStatus::Success;
                self.fields.clear();
                SubmitOutcome::Sent
            }
            Err(kind) => {
                self.status = FormStatus::Failure(kind);
                SubmitOutcome::Failed(kind)
            }
        }
    }
}
