use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;

use crate::domain::service::ContactService;

use super::dto::{CreateContactRequest, StatusResponse};
use super::error::ApiError;

/// `POST /contacts`
///
/// The body extractor runs as a `Result` so a binding failure (missing or
/// mistyped required field) surfaces its own message as the 400 payload
/// instead of axum's default plain-text response.
pub async fn create_contact(
    Extension(svc): Extension<Arc<ContactService>>,
    payload: Result<Json<CreateContactRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;

    svc.save_contact(req.into()).await?;

    Ok(Json(StatusResponse::CONTACT_SAVED))
}

/// `GET /healthz` liveness probe.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::OK)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt as _;

    use crate::api::rest::routes;
    use crate::domain::model::NewContact;
    use crate::domain::repo::ContactsRepository;
    use crate::domain::service::ContactService;

    struct MockRepository {
        fail_with: Option<String>,
    }

    #[async_trait]
    impl ContactsRepository for MockRepository {
        async fn insert(&self, _contact: &NewContact) -> anyhow::Result<()> {
            match &self.fail_with {
                Some(msg) => anyhow::bail!("{msg}"),
                None => Ok(()),
            }
        }
    }

    fn test_router(fail_with: Option<&str>) -> axum::Router {
        let service = Arc::new(ContactService::new(Arc::new(MockRepository {
            fail_with: fail_with.map(str::to_owned),
        })));
        routes::router(service)
    }

    fn post_contacts(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/contacts")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_contact_returns_contact_saved() {
        let app = test_router(None);

        let body = r#"{"full_name":"Alex Bell","email":"alex@bell-labs.com","phone_numbers":["+61385786688","+61412345678"]}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "Contact saved");
    }

    #[tokio::test]
    async fn missing_full_name_returns_binding_error() {
        let app = test_router(None);

        let body = r#"{"phone_numbers":["+61412345678"]}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("full_name"), "unexpected error: {message}");
    }

    #[tokio::test]
    async fn missing_phone_numbers_returns_binding_error() {
        let app = test_router(None);

        let body = r#"{"full_name":"Alex Bell"}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(
            message.contains("phone_numbers"),
            "unexpected error: {message}"
        );
    }

    #[tokio::test]
    async fn invalid_phone_returns_fixed_message() {
        let app = test_router(None);

        let body = r#"{"full_name":"Alex Bell","email":"alex@bell-labs.com","phone_numbers":["03 8578 6688"]}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid Australian phone number");
    }

    #[tokio::test]
    async fn toll_free_number_is_accepted() {
        let app = test_router(None);

        let body = r#"{"full_name":"X","phone_numbers":["+611800123456"]}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn storage_failure_returns_500_with_error_text() {
        let app = test_router(Some("connection refused"));

        let body = r#"{"full_name":"Alex Bell","phone_numbers":["+61412345678"]}"#;
        let response = app.oneshot(post_contacts(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "connection refused");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = test_router(None);

        let request = Request::builder()
            .method("GET")
            .uri("/healthz")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }
}
