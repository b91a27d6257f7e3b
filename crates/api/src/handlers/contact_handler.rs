//! Contact form handler.

use axum::{
    http::{header::USER_AGENT, HeaderMap},
    response::Json,
    routing::post,
    Router,
};
use axum_extra::extract::CookieJar;

use common::AppResult;
use domain::ContactForm;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Cookie carrying the advertising identifier
pub const ADS_COOKIE: &str = "ads";

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact))
}

/// Submit the contact form
///
/// Responds with the caller's raw `User-Agent` header, or `null` when absent.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    params(
        ("User-Agent" = Option<String>, Header, description = "Client user agent"),
        ("ads" = Option<String>, Cookie, description = "Advertising identifier")
    ),
    responses(
        (status = 200, description = "User agent of the caller", body = String),
        (status = 422, description = "Validation error")
    )
)]
pub async fn contact(
    headers: HeaderMap,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> AppResult<Json<Option<String>>> {
    let ads = jar.get(ADS_COOKIE).map(|cookie| cookie.value().to_owned());
    tracing::debug!(email = %form.email, ads = ?ads, "Contact message accepted");

    // Echoed byte for byte; only bytes that are not UTF-8 get replaced.
    let user_agent = headers
        .get(USER_AGENT)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    Ok(Json(user_agent))
}
