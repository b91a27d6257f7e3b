//! Home handler.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Fixed greeting
#[derive(Debug, Serialize, ToSchema)]
pub struct HomeResponse {
    #[schema(example = "world")]
    pub hello: String,
}

/// Create home routes
pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// Greet the caller
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "Greeting", body = HomeResponse)
    )
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        hello: "world".to_string(),
    })
}
