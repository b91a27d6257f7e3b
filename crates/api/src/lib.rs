//! Person API Library
//!
//! This crate provides the HTTP surface: routes, validating extractors,
//! handlers and the generated OpenAPI document.
//!
//! # Routes
//!
//! - `GET /` - greeting
//! - `POST /person/new` - create a person (JSON body)
//! - `GET /person/detail` - echo name and age (query string)
//! - `GET /person/detail/{person_id}` - existence check (path)
//! - `PUT /person/{person_id}` - update a person and location (path + JSON body)
//! - `POST /login` - form login
//! - `POST /contact` - contact form with header and cookie
//! - `POST /post-image` - multipart image upload

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

pub use crate::openapi::ApiDoc;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = AppState::from_config(config);
    info!(
        known_persons = state.persons.len(),
        docs = state.config.enable_docs,
        "Application state ready"
    );

    // Build router
    let app = create_router(state);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Person API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
