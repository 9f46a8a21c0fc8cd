use anyhow::Context;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use verta_form_contracts::{ContactApiService, SubmissionDraft, SubmissionOutcome};
use verta_models::locale::Locale;

/// Speaks the submit RPC over HTTP.
#[derive(Debug, Clone)]
pub struct ContactApiServiceImpl {
    client: Client,
    config: ContactApiServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactApiServiceConfig {
    /// Full url of the submit endpoint, e.g. `http://127.0.0.1:8000/contact`.
    pub endpoint: Url,
}

impl ContactApiServiceImpl {
    pub fn new(config: ContactApiServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl ContactApiService for ContactApiServiceImpl {
    async fn submit(
        &self,
        draft: &SubmissionDraft,
        locale: Locale,
    ) -> anyhow::Result<SubmissionOutcome> {
        let request = SubmitRequest {
            name: &draft.name,
            email: &draft.email,
            company: &draft.company,
            message: &draft.message,
            locale,
        };

        // The verdict lives in the body whatever the status code says, so
        // the body is decoded unconditionally.
        let response = self
            .client
            .post(self.config.endpoint.clone())
            .json(&request)
            .send()
            .await
            .context("Failed to reach the contact endpoint")?
            .json::<SubmitResponse>()
            .await
            .context("Failed to decode the contact response")?;

        match response {
            SubmitResponse { success: true, .. } => Ok(SubmissionOutcome::Accepted),
            SubmitResponse {
                error: Some(error), ..
            } => Ok(SubmissionOutcome::Rejected(error)),
            SubmitResponse { .. } => {
                anyhow::bail!("The server reported a failure without an error message")
            }
        }
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    message: &'a str,
    locale: Locale,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_wire_format() {
        let request = SubmitRequest {
            name: "Jane Doe",
            email: "jane@example.com",
            company: "",
            message: "Interested in a new website build.",
            locale: Locale::El,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "company": "",
                "message": "Interested in a new website build.",
                "locale": "el",
            })
        );
    }

    #[test]
    fn response_wire_format() {
        let accepted = serde_json::from_value::<SubmitResponse>(json!({"success": true})).unwrap();
        assert!(accepted.success);
        assert_eq!(accepted.error, None);

        let rejected = serde_json::from_value::<SubmitResponse>(
            json!({"success": false, "error": "Invalid email address"}),
        )
        .unwrap();
        assert!(!rejected.success);
        assert_eq!(rejected.error.as_deref(), Some("Invalid email address"));
    }
}
