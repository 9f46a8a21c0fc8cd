use std::net::IpAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use verta_core_contact_contracts::ContactService;
use verta_core_health_contracts::HealthService;
use verta_di::Build;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact, Health> {
    contact: Contact,
    health: Health,
}

impl<Contact, Health> RestServer<Contact, Health>
where
    Contact: ContactService,
    Health: HealthService,
{
    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        // The form is submitted from the browser, so the api answers
        // preflight requests for any origin.
        let router = Router::new()
            .merge(routes::contact::router(self.contact.into()))
            .merge(routes::health::router(self.health.into()))
            .layer(CorsLayer::permissive());

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, extract::Request};
    use tower::ServiceExt;
    use verta_core_contact_contracts::MockContactService;
    use verta_core_health_contracts::{HealthStatus, MockHealthService};

    use super::*;

    #[tokio::test]
    async fn attaches_a_request_id_to_every_response() {
        // Arrange
        let server = RestServer {
            contact: MockContactService::new(),
            health: MockHealthService::new().with_get_status(HealthStatus { email: true }),
        };

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        // Act
        let response = server.router().oneshot(request).await.unwrap();

        // Assert
        assert!(response.headers().contains_key("X-Request-Id"));
    }
}
