use std::future::Future;

use verta_models::locale::Locale;

/// Gateway to the submit RPC of a running server.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Submit the draft and return the server's verdict. `Err` means the
    /// transport itself failed (network error, undecodable response), not
    /// that the server rejected the submission.
    fn submit(
        &self,
        draft: &SubmissionDraft,
        locale: Locale,
    ) -> impl Future<Output = anyhow::Result<SubmissionOutcome>> + Send;
}

/// The field values as typed into the form. An empty string means the field
/// has not been filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// The server's verdict on a submission. A rejection carries the message to
/// show the user, already localized by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(String),
}

/// UI state of the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_submit(
        mut self,
        draft: SubmissionDraft,
        locale: Locale,
        result: anyhow::Result<SubmissionOutcome>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(draft),
                mockall::predicate::eq(locale),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
