use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::Response,
    Json,
};

use crate::routes::error;

/// [`Json`] with the rejection reshaped into the api's `success`-shaped
/// error body, so undecodable payloads answer in the wire format too.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(error(rejection.status(), "Invalid request body")),
        }
    }
}
