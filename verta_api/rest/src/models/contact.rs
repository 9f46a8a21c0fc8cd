use serde::Deserialize;
use verta_models::{
    contact::{
        ContactSubmission, SubmissionCompany, SubmissionEmail, SubmissionMessage, SubmissionName,
    },
    locale::Locale,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactSubmission {
    /// Full name of the submitter
    pub name: SubmissionName,
    /// Email address of the submitter
    pub email: SubmissionEmail,
    /// Company of the submitter
    #[serde(default)]
    pub company: Option<SubmissionCompany>,
    /// The inquiry itself
    pub message: SubmissionMessage,
    /// Language of the submitter; unrecognized values fall back to English
    #[serde(default)]
    pub locale: Locale,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            company: value.company,
            message: value.message,
            locale: value.locale,
        }
    }
}
