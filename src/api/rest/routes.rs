use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::domain::service::ContactService;

use super::handlers;

/// Build the service router. The service is injected as an extension so the
/// handler owns no state of its own.
pub fn router(service: Arc<ContactService>) -> Router {
    Router::new()
        .route("/contacts", post(handlers::create_contact))
        .route("/healthz", get(handlers::health))
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
}
