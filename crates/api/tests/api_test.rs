//! Integration tests for API endpoints.
//!
//! Each test drives the real router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};
use tower::ServiceExt;

use person_api::config::ApiConfig;
use person_api::routes::create_router;
use person_api::state::AppState;

const BOUNDARY: &str = "person-api-test-boundary";

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    create_router(AppState::default())
}

fn app_with(config: ApiConfig) -> Router {
    create_router(AppState::from_config(config))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a multipart body from text parts and an optional file part.
fn multipart_body(texts: &[(&str, &str)], file: Option<(&str, &str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in texts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, filename, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn person_json() -> Value {
    json!({
        "first_name": "Ana",
        "last_name": "Lee",
        "age": 30,
        "password": "abcdefgh"
    })
}

fn error_rules(body: &Value) -> Vec<(String, String)> {
    body["error"]["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .map(|d| {
                    (
                        d["field"].as_str().unwrap_or_default().to_owned(),
                        d["rule"].as_str().unwrap_or_default().to_owned(),
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn rules(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(field, rule)| (field.to_string(), rule.to_string()))
        .collect()
}

fn error_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]
        .as_array()
        .map(|details| {
            details
                .iter()
                .filter_map(|d| d["field"].as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

// =============================================================================
// Home
// =============================================================================

#[tokio::test]
async fn test_home_returns_greeting() {
    let (status, body) = send(app(), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "hello": "world" }));
}

// =============================================================================
// POST /person/new
// =============================================================================

#[tokio::test]
async fn test_create_person_strips_password() {
    let mut person = person_json();
    person["hair_color"] = json!("blonde");
    person["is_married"] = json!(true);

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("password").is_none());
    assert_eq!(body["first_name"], "Ana");
    assert_eq!(body["last_name"], "Lee");
    assert_eq!(body["age"], 30);
    assert_eq!(body["hair_color"], "blonde");
    assert_eq!(body["is_married"], true);
}

#[tokio::test]
async fn test_create_person_rejects_age_out_of_range() {
    for age in [0, -1, 101] {
        let mut person = person_json();
        person["age"] = json!(age);

        let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "age {age}");
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(error_fields(&body), vec!["age"]);
        assert_eq!(body["error"]["details"][0]["location"], "body");
    }
}

#[tokio::test]
async fn test_create_person_lists_every_failing_field() {
    let person = json!({
        "first_name": "",
        "last_name": "Lee",
        "age": 150,
        "password": "short"
    });

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["age", "first_name", "password"]);
}

#[tokio::test]
async fn test_create_person_rejects_unknown_hair_color() {
    let mut person = person_json();
    person["hair_color"] = json!("green");

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(error_rules(&body), rules(&[("hair_color", "enum")]));
    assert_eq!(body["error"]["details"][0]["location"], "body");
}

#[tokio::test]
async fn test_create_person_requires_mandatory_fields() {
    let person = json!({ "first_name": "Ana", "age": 30, "password": "abcdefgh" });

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_rules(&body), rules(&[("last_name", "missing")]));
}

#[tokio::test]
async fn test_create_person_reports_unreadable_and_invalid_fields_together() {
    let person = json!({
        "first_name": "",
        "last_name": "Lee",
        "age": 0,
        "hair_color": "green",
        "password": "abcdefgh"
    });

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_rules(&body),
        rules(&[("age", "range"), ("first_name", "length"), ("hair_color", "enum")])
    );
}

#[tokio::test]
async fn test_create_person_names_mistyped_age() {
    let mut person = person_json();
    person["age"] = json!("thirty");
    person["password"] = json!("short");

    let (status, body) = send(app(), json_request(Method::POST, "/person/new", person)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_rules(&body),
        rules(&[("age", "type"), ("password", "length")])
    );
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("age"));
}

#[tokio::test]
async fn test_create_person_rejects_non_object_body() {
    let (status, body) = send(app(), json_request(Method::POST, "/person/new", json!([1, 2]))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_rules(&body), rules(&[("body", "type")]));
}

// =============================================================================
// GET /person/detail
// =============================================================================

#[tokio::test]
async fn test_person_detail_maps_name_to_age() {
    let (status, body) = send(app(), get("/person/detail?name=Luis&age=25")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Luis": "25" }));
}

#[tokio::test]
async fn test_person_detail_without_name_uses_null_key() {
    let (status, body) = send(app(), get("/person/detail?age=25")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "null": "25" }));
}

#[tokio::test]
async fn test_person_detail_requires_age() {
    let (status, body) = send(app(), get("/person/detail?name=Luis")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(error_rules(&body), rules(&[("age", "missing")]));
    assert_eq!(body["error"]["details"][0]["location"], "query");
}

#[tokio::test]
async fn test_person_detail_rejects_long_name() {
    let uri = format!("/person/detail?name={}&age=25", "a".repeat(51));

    let (status, body) = send(app(), get(&uri)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["name"]);
    assert_eq!(body["error"]["details"][0]["location"], "query");
}

// =============================================================================
// GET /person/detail/{person_id}
// =============================================================================

#[tokio::test]
async fn test_known_person_exists() {
    for id in 1..=5 {
        let (status, body) = send(app(), get(&format!("/person/detail/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[id.to_string()], "It exists!");
    }
}

#[tokio::test]
async fn test_unknown_person_is_not_found() {
    let (status, body) = send(app(), get("/person/detail/6")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "This person doesn't exist");
}

#[tokio::test]
async fn test_non_positive_person_id_fails_validation() {
    for id in ["0", "-7"] {
        let (status, body) = send(app(), get(&format!("/person/detail/{id}"))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "id {id}");
        assert_eq!(error_fields(&body), vec!["person_id"]);
        assert_eq!(body["error"]["details"][0]["location"], "path");
    }
}

#[tokio::test]
async fn test_non_integer_person_id_fails_validation() {
    let (status, body) = send(app(), get("/person/detail/abc")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_rules(&body), rules(&[("person_id", "type")]));
    assert_eq!(body["error"]["details"][0]["location"], "path");
}

#[tokio::test]
async fn test_registry_comes_from_config() {
    let config = ApiConfig {
        person_ids: vec![42],
        ..ApiConfig::default()
    };

    let (status, _) = send(app_with(config.clone()), get("/person/detail/42")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app_with(config), get("/person/detail/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// PUT /person/{person_id}
// =============================================================================

#[tokio::test]
async fn test_update_person_merges_person_and_location() {
    let payload = json!({
        "person": person_json(),
        "location": { "city": "X", "state": "Y", "conuntry": "Z" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/5", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "first_name": "Ana",
            "last_name": "Lee",
            "age": 30,
            "hair_color": null,
            "is_married": null,
            "password": "abcdefgh",
            "city": "X",
            "state": "Y",
            "conuntry": "Z"
        })
    );
}

#[tokio::test]
async fn test_update_person_accepts_country_spelling() {
    let payload = json!({
        "person": person_json(),
        "location": { "city": "X", "state": "Y", "country": "Z" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/5", payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conuntry"], "Z");
    assert!(body.get("country").is_none());
}

#[tokio::test]
async fn test_update_person_reports_nested_field_paths() {
    let mut person = person_json();
    person["age"] = json!(0);
    let payload = json!({
        "person": person,
        "location": { "city": "X", "state": "Y", "country": "Z" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/5", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["person.age"]);
}

#[tokio::test]
async fn test_update_person_requires_location() {
    let payload = json!({ "person": person_json() });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/5", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_rules(&body), rules(&[("location", "missing")]));
}

#[tokio::test]
async fn test_update_person_rejects_empty_location_fields() {
    let payload = json!({
        "person": person_json(),
        "location": { "city": "", "state": "Y", "conuntry": "" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/5", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_rules(&body),
        rules(&[("location.city", "length"), ("location.conuntry", "length")])
    );
}

#[tokio::test]
async fn test_update_person_reports_path_and_body_together() {
    let mut person = person_json();
    person["hair_color"] = json!("green");
    let payload = json!({
        "person": person,
        "location": { "city": "X", "state": "Y" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/0", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_rules(&body),
        rules(&[
            ("person_id", "range"),
            ("location.conuntry", "missing"),
            ("person.hair_color", "enum"),
        ])
    );
    assert_eq!(body["error"]["details"][0]["location"], "path");
    assert_eq!(body["error"]["details"][1]["location"], "body");
}

#[tokio::test]
async fn test_update_person_rejects_non_positive_id() {
    let payload = json!({
        "person": person_json(),
        "location": { "city": "X", "state": "Y", "country": "Z" }
    });

    let (status, body) = send(app(), json_request(Method::PUT, "/person/0", payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["person_id"]);
}

// =============================================================================
// POST /login
// =============================================================================

#[tokio::test]
async fn test_login_returns_username_and_message() {
    let (status, body) = send(
        app(),
        form_request("/login", "username=luis2021&password=holamundo"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "username": "luis2021", "message": "Login successful" })
    );
}

#[tokio::test]
async fn test_login_accepts_multipart_form() {
    let body = multipart_body(&[("username", "luis"), ("password", "holamundo")], None);

    let (status, body) = send(app(), multipart_request("/login", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "luis");
}

#[tokio::test]
async fn test_login_rejects_long_username() {
    let form = format!("username={}&password=holamundo", "u".repeat(21));

    let (status, body) = send(app(), form_request("/login", &form)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["username"]);
    assert_eq!(body["error"]["details"][0]["location"], "form");
}

#[tokio::test]
async fn test_login_requires_password() {
    let (status, body) = send(app(), form_request("/login", "username=luis")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_rules(&body), rules(&[("password", "missing")]));
    assert_eq!(body["error"]["details"][0]["location"], "form");
}

#[tokio::test]
async fn test_login_reports_missing_and_short_fields_together() {
    let body = multipart_body(&[("password", "short")], None);

    let (status, body) = send(app(), multipart_request("/login", body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        error_rules(&body),
        rules(&[("password", "length"), ("username", "missing")])
    );
}

// =============================================================================
// POST /contact
// =============================================================================

const CONTACT_FORM: &str = "first_name=Luis&last_name=Garcia&email=luis%40example.com&message=I+would+like+to+know+more+about+this";

#[tokio::test]
async fn test_contact_echoes_user_agent() {
    let mut request = form_request("/contact", CONTACT_FORM);
    request
        .headers_mut()
        .insert(header::USER_AGENT, "curl/8.4.0".parse().unwrap());
    request
        .headers_mut()
        .insert(header::COOKIE, "ads=campaign-7".parse().unwrap());

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("curl/8.4.0"));
}

#[tokio::test]
async fn test_contact_echoes_non_ascii_user_agent() {
    let mut request = form_request("/contact", CONTACT_FORM);
    request.headers_mut().insert(
        header::USER_AGENT,
        header::HeaderValue::from_bytes("Navegador/1.0 (México)".as_bytes()).unwrap(),
    );

    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Navegador/1.0 (México)"));
}

#[tokio::test]
async fn test_contact_without_user_agent_returns_null() {
    let (status, body) = send(app(), form_request("/contact", CONTACT_FORM)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_contact_rejects_bad_email_and_short_message() {
    let form = "first_name=Luis&last_name=Garcia&email=not-an-email&message=hi";

    let (status, body) = send(app(), form_request("/contact", form)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["email", "message"]);
}

// =============================================================================
// POST /post-image
// =============================================================================

#[tokio::test]
async fn test_post_image_reports_metadata() {
    let bytes = vec![7u8; 2048];
    let body = multipart_body(&[], Some(("image", "cat.png", "image/png", &bytes)));

    let (status, body) = send(app(), multipart_request("/post-image", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Filename"], "cat.png");
    assert_eq!(body["Format"], "image/png");
    assert_eq!(body["Size(kb)"], 2.0);
}

#[tokio::test]
async fn test_post_image_rounds_size() {
    let bytes = vec![0u8; 1000];
    let body = multipart_body(&[], Some(("image", "tiny.gif", "image/gif", &bytes)));

    let (status, body) = send(app(), multipart_request("/post-image", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Size(kb)"], 0.98);
}

#[tokio::test]
async fn test_post_image_requires_image_part() {
    let body = multipart_body(&[("caption", "no file here")], None);

    let (status, body) = send(app(), multipart_request("/post-image", body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error_fields(&body), vec!["image"]);
    assert_eq!(body["error"]["details"][0]["location"], "file");
}

#[tokio::test]
async fn test_post_image_rejects_oversized_upload() {
    let config = ApiConfig {
        max_upload_bytes: 1024,
        ..ApiConfig::default()
    };
    let bytes = vec![0u8; 4096];
    let body = multipart_body(&[], Some(("image", "big.png", "image/png", &bytes)));

    let (status, _) = send(app_with(config), multipart_request("/post-image", body)).await;

    assert!(status.is_client_error(), "unexpected status {status}");
}

// =============================================================================
// Documentation
// =============================================================================

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = send(app(), get("/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/person/new"].is_object());
}

#[tokio::test]
async fn test_docs_can_be_disabled() {
    let config = ApiConfig {
        enable_docs: false,
        ..ApiConfig::default()
    };

    let (status, _) = send(app_with(config), get("/openapi.json")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_config_parses_person_ids() {
    use person_api::config::parse_person_ids;

    assert_eq!(parse_person_ids("3,4"), vec![3, 4]);
    assert!(parse_person_ids("nope").is_empty());
}

#[tokio::test]
async fn test_server_addr_parses() {
    let addr = ApiConfig::default()
        .server_addr()
        .parse::<std::net::SocketAddr>();
    assert_ok!(addr);

    let bad = ApiConfig {
        host: "not a host".to_string(),
        ..ApiConfig::default()
    };
    assert_err!(bad.server_addr().parse::<std::net::SocketAddr>());
}
