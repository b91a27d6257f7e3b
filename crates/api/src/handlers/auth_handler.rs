//! Login handler.

use axum::{response::Json, routing::post, Router};

use common::AppResult;
use domain::{LoginForm, LoginOut};

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Log a user in
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginOut),
        (status = 422, description = "Validation error")
    )
)]
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> AppResult<Json<LoginOut>> {
    tracing::debug!(username = %form.username, "Login accepted");
    let out = LoginOut::new(form.username)?;
    Ok(Json(out))
}
