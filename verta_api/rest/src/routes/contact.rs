use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing, Router};
use verta_core_contact_contracts::{ContactService, ContactSubmitError};

use super::{error, ok};
use crate::{extractors::ApiJson, models::contact::ApiContactSubmission};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactService>>,
    ApiJson(submission): ApiJson<ApiContactSubmission>,
) -> Response {
    let locale = submission.locale;
    match service.submit(submission.into()).await {
        Ok(()) => ok(),
        Err(err) => {
            let status = match &err {
                ContactSubmitError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ContactSubmitError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                ContactSubmitError::Send => StatusCode::INTERNAL_SERVER_ERROR,
                ContactSubmitError::Other(cause) => {
                    tracing::error!("Failed to handle contact submission: {cause:#}");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            error(status, err.user_message(locale))
        }
    }
}
