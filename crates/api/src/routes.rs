//! Route configuration.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{auth_routes, contact_routes, home_routes, person_routes, upload_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let max_body = state.config.max_upload_bytes;
    let enable_docs = state.config.enable_docs;

    let mut router = Router::new()
        .merge(home_routes())
        .nest("/person", person_routes())
        .merge(auth_routes())
        .merge(contact_routes())
        .merge(upload_routes());

    // Swagger UI
    if enable_docs {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
