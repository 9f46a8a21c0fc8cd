use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::warn;
use verta_form_contracts::{ContactApiService, FormState, SubmissionDraft, SubmissionOutcome};
use verta_models::locale::Locale;

pub use gateway::{ContactApiServiceConfig, ContactApiServiceImpl};

mod gateway;

/// How long a verdict stays on screen before the form returns to idle.
const RESET_DELAY: Duration = Duration::from_secs(5);

/// Owner of the submission form's draft and UI state.
///
/// A submission is a single in-flight call: while one is running (or its
/// success is still displayed) further submits are ignored. After a verdict
/// the form returns to idle on its own, via a timer task that is cancelled
/// when the form is dropped or when a new submission starts.
pub struct ContactForm<Api> {
    api: Api,
    config: ContactFormConfig,
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Clone)]
pub struct ContactFormConfig {
    pub locale: Locale,
    /// Shown when the transport itself fails and no server verdict exists.
    pub fallback_error: String,
}

#[derive(Debug, Default)]
struct Inner {
    draft: SubmissionDraft,
    state: FormState,
    reset: Option<JoinHandle<()>>,
}

impl<Api: ContactApiService> ContactForm<Api> {
    pub fn new(api: Api, config: ContactFormConfig) -> Self {
        Self {
            api,
            config,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Submit the current draft and return the resulting state.
    ///
    /// A no-op while a submission is in flight or its success is still
    /// displayed. Issues exactly one call to the server per accepted submit.
    pub async fn submit(&self) -> FormState {
        let draft = {
            let mut inner = self.inner.lock().await;
            if let FormState::Submitting | FormState::Success = inner.state {
                return inner.state.clone();
            }
            if let Some(reset) = inner.reset.take() {
                reset.abort();
            }
            inner.state = FormState::Submitting;
            inner.draft.clone()
        };

        let result = self.api.submit(&draft, self.config.locale).await;

        let mut inner = self.inner.lock().await;
        inner.state = match result {
            Ok(SubmissionOutcome::Accepted) => {
                inner.draft = SubmissionDraft::default();
                FormState::Success
            }
            Ok(SubmissionOutcome::Rejected(message)) => FormState::Error(message),
            Err(err) => {
                warn!("Failed to submit the contact form: {err:#}");
                FormState::Error(self.config.fallback_error.clone())
            }
        };
        inner.reset = Some(self.schedule_reset());
        inner.state.clone()
    }

    pub async fn set_name(&self, name: impl Into<String>) {
        self.inner.lock().await.draft.name = name.into();
    }

    pub async fn set_email(&self, email: impl Into<String>) {
        self.inner.lock().await.draft.email = email.into();
    }

    pub async fn set_company(&self, company: impl Into<String>) {
        self.inner.lock().await.draft.company = company.into();
    }

    pub async fn set_message(&self, message: impl Into<String>) {
        self.inner.lock().await.draft.message = message.into();
    }

    pub async fn state(&self) -> FormState {
        self.inner.lock().await.state.clone()
    }

    pub async fn draft(&self) -> SubmissionDraft {
        self.inner.lock().await.draft.clone()
    }

    fn schedule_reset(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            let mut inner = inner.lock().await;
            inner.state = FormState::Idle;
            inner.reset = None;
        })
    }
}

impl<Api> Drop for ContactForm<Api> {
    fn drop(&mut self) {
        // The timer must not outlive the form.
        if let Ok(mut inner) = self.inner.try_lock() {
            if let Some(reset) = inner.reset.take() {
                reset.abort();
            }
        }
    }
}
