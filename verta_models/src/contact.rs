use nutype::nutype;
use thiserror::Error;

use crate::{email_address::EmailAddress, locale::Locale};

/// A contact-form submission as received from the site, before validation.
/// Submissions are transient: they exist only for the duration of one
/// request and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: SubmissionEmail,
    pub company: Option<SubmissionCompany>,
    pub message: SubmissionMessage,
    pub locale: Locale,
}

/// A submission that has passed validation in full. Only obtainable through
/// [`ContactSubmission::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInquiry {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub company: Option<SubmissionCompany>,
    pub message: SubmissionMessage,
}

impl ContactSubmission {
    /// Checks the fields in a fixed order (name, email, message) and returns
    /// the first rule the submission breaks. Company cannot fail validation;
    /// an empty or whitespace-only company collapses to `None`.
    pub fn validate(self) -> Result<ProjectInquiry, SubmissionViolation> {
        if self.name.chars().count() < SubmissionName::MIN_CHARS {
            return Err(SubmissionViolation::NameTooShort);
        }

        let email = self
            .email
            .parse::<EmailAddress>()
            .map_err(|_| SubmissionViolation::EmailInvalid)?;

        if self.message.chars().count() < SubmissionMessage::MIN_CHARS {
            return Err(SubmissionViolation::MessageTooShort);
        }

        Ok(ProjectInquiry {
            name: self.name,
            email,
            company: self.company.filter(|company| !company.trim().is_empty()),
            message: self.message,
        })
    }
}

/// The first rule a submission broke, in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionViolation {
    #[error("name is shorter than {} characters", SubmissionName::MIN_CHARS)]
    NameTooShort,
    #[error("email address does not parse")]
    EmailInvalid,
    #[error("message is shorter than {} characters", SubmissionMessage::MIN_CHARS)]
    MessageTooShort,
}

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

impl SubmissionName {
    pub const MIN_CHARS: usize = 2;
}

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionEmail(String);

#[nutype(
    validate(len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionCompany(String);

#[nutype(
    validate(len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

impl SubmissionMessage {
    pub const MIN_CHARS: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_submission() {
        // Arrange
        let submission = submission("Jane Doe", "jane@example.com", Some("Acme Inc"), "We need a new website.");

        // Act
        let inquiry = submission.validate().unwrap();

        // Assert
        assert_eq!(*inquiry.name, "Jane Doe");
        assert_eq!(inquiry.email.as_str(), "jane@example.com");
        assert_eq!(*inquiry.company.unwrap(), "Acme Inc");
        assert_eq!(*inquiry.message, "We need a new website.");
    }

    #[test]
    fn rejects_short_name_first() {
        // A short name wins even if later fields are broken too.
        let submission = submission("J", "not-an-email", None, "short");

        let result = submission.validate();

        assert_eq!(result, Err(SubmissionViolation::NameTooShort));
    }

    #[test]
    fn rejects_invalid_email() {
        let submission = submission("Jane Doe", "not-an-email", None, "We need a new website.");

        let result = submission.validate();

        assert_eq!(result, Err(SubmissionViolation::EmailInvalid));
    }

    #[test]
    fn rejects_short_message() {
        let submission = submission("Jane Doe", "jane@example.com", None, "Hi");

        let result = submission.validate();

        assert_eq!(result, Err(SubmissionViolation::MessageTooShort));
    }

    #[test]
    fn name_is_not_trimmed() {
        // Two characters including leading whitespace pass, as submitted.
        let submission = submission(" J", "jane@example.com", None, "We need a new website.");

        assert!(submission.validate().is_ok());
    }

    #[test]
    fn blank_company_collapses_to_none() {
        for company in [None, Some(""), Some("   ")] {
            let submission = submission("Jane Doe", "jane@example.com", company, "We need a new website.");

            let inquiry = submission.validate().unwrap();

            assert_eq!(inquiry.company, None);
        }
    }

    fn submission(
        name: &str,
        email: &str,
        company: Option<&str>,
        message: &str,
    ) -> ContactSubmission {
        ContactSubmission {
            name: name.to_owned().try_into().unwrap(),
            email: email.to_owned().try_into().unwrap(),
            company: company.map(|company| company.to_owned().try_into().unwrap()),
            message: message.to_owned().try_into().unwrap(),
            locale: Locale::En,
        }
    }
}
