//! Application state for dependency injection.

use std::sync::Arc;

use domain::PersonRegistry;

use crate::config::ApiConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only identifier set, built once at startup
    pub persons: Arc<PersonRegistry>,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(persons: Arc<PersonRegistry>, config: ApiConfig) -> Self {
        Self {
            persons,
            config: Arc::new(config),
        }
    }

    /// Build state from configuration, seeding the registry from `config.person_ids`.
    pub fn from_config(config: ApiConfig) -> Self {
        let persons = Arc::new(PersonRegistry::new(config.person_ids.iter().copied()));
        Self::new(persons, config)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(ApiConfig::default())
    }
}
