use std::future::Future;

use thiserror::Error;
use verta_models::{
    contact::{ContactSubmission, SubmissionViolation},
    locale::Locale,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate the submission and forward it to the operator mailbox.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("Invalid submission: {0}")]
    Invalid(#[from] SubmissionViolation),
    #[error("Contact email delivery is not configured.")]
    NotConfigured,
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ContactSubmitError {
    /// The message shown to the submitter, in their language. Underlying
    /// causes never surface here; they belong in the server logs.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        use SubmissionViolation::*;

        match (self, locale) {
            (Self::Invalid(NameTooShort), Locale::En) => "Name must be at least 2 characters",
            (Self::Invalid(NameTooShort), Locale::El) => {
                "Το όνομα πρέπει να έχει τουλάχιστον 2 χαρακτήρες"
            }
            (Self::Invalid(EmailInvalid), Locale::En) => "Invalid email address",
            (Self::Invalid(EmailInvalid), Locale::El) => "Μη έγκυρη διεύθυνση email",
            (Self::Invalid(MessageTooShort), Locale::En) => {
                "Message must be at least 10 characters"
            }
            (Self::Invalid(MessageTooShort), Locale::El) => {
                "Το μήνυμα πρέπει να έχει τουλάχιστον 10 χαρακτήρες"
            }
            (Self::NotConfigured, Locale::En) => {
                "The contact service is not configured. Please try again later."
            }
            (Self::NotConfigured, Locale::El) => {
                "Η υπηρεσία επικοινωνίας δεν έχει ρυθμιστεί. Παρακαλώ δοκιμάστε ξανά αργότερα."
            }
            (Self::Send | Self::Other(_), Locale::En) => {
                "Failed to send message. Please try again later."
            }
            (Self::Send | Self::Other(_), Locale::El) => {
                "Αποτυχία αποστολής μηνύματος. Παρακαλώ δοκιμάστε ξανά αργότερα."
            }
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_violation_messages() {
        for (violation, en, el) in [
            (
                SubmissionViolation::NameTooShort,
                "Name must be at least 2 characters",
                "Το όνομα πρέπει να έχει τουλάχιστον 2 χαρακτήρες",
            ),
            (
                SubmissionViolation::EmailInvalid,
                "Invalid email address",
                "Μη έγκυρη διεύθυνση email",
            ),
            (
                SubmissionViolation::MessageTooShort,
                "Message must be at least 10 characters",
                "Το μήνυμα πρέπει να έχει τουλάχιστον 10 χαρακτήρες",
            ),
        ] {
            let error = ContactSubmitError::Invalid(violation);

            assert_eq!(error.user_message(Locale::En), en);
            assert_eq!(error.user_message(Locale::El), el);
        }
    }

    #[test]
    fn send_failures_share_one_generic_message() {
        let send = ContactSubmitError::Send;
        let other = ContactSubmitError::Other(anyhow::anyhow!("tls handshake failed"));

        for error in [&send, &other] {
            assert_eq!(
                error.user_message(Locale::En),
                "Failed to send message. Please try again later."
            );
            assert_eq!(
                error.user_message(Locale::El),
                "Αποτυχία αποστολής μηνύματος. Παρακαλώ δοκιμάστε ξανά αργότερα."
            );
        }
    }

    #[test]
    fn not_configured_has_its_own_message() {
        let error = ContactSubmitError::NotConfigured;

        assert_eq!(
            error.user_message(Locale::En),
            "The contact service is not configured. Please try again later."
        );
        assert_eq!(
            error.user_message(Locale::El),
            "Η υπηρεσία επικοινωνίας δεν έχει ρυθμιστεί. Παρακαλώ δοκιμάστε ξανά αργότερα."
        );
    }
}
